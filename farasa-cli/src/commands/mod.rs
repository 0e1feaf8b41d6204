//! CLI command implementations

use clap::ValueEnum;

pub mod process;

pub use process::ProcessArgs;

/// Toolkit functions available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    /// Split prefixes and suffixes off words
    #[value(name = "segment")]
    Segment,
    /// Tag parts of speech
    #[value(name = "POS_tag", alias = "pos_tag", alias = "pos-tag")]
    PosTag,
}

impl Function {
    /// Parse a function name typed at the prompt
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_function_names() {
        assert_eq!(Function::parse("segment"), Some(Function::Segment));
        assert_eq!(Function::parse("POS_tag"), Some(Function::PosTag));
        assert_eq!(Function::parse("pos_tag"), Some(Function::PosTag));
        assert_eq!(Function::parse(" pos-tag "), Some(Function::PosTag));
        assert_eq!(Function::parse("lemmatize"), None);
    }

    #[test]
    fn test_possible_values_shown_in_help() {
        let names: Vec<_> = Function::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["segment", "POS_tag"]);
    }
}
