//! Non-Arabic sections around the POS tagger
//!
//! The tagger only makes sense of Arabic. Longer runs of Latin letters,
//! digits and simple punctuation are either dropped before tagging or cut
//! out, replaced by a placeholder line and spliced back into the tagged
//! output.

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder line standing in for a cut-out section
pub const PLACEHOLDER: &str = "µµµ";

/// A run of at least eight Latin/digit/punctuation characters
const SECTION_PATTERN: &str = r"[a-zA-Z\d .;#\n\r]{6,}[^\n\r][a-zA-Z\d.;#]";
/// How the tagger renders a placeholder line
const TAGGED_PLACEHOLDER_PATTERN: &str = r"[\n\r]*S/S µ/PUNC µ/PUNC µ/PUNC E/E[\n\r]*";
/// A `###` separator left in front of a sentence start
const HASH_SEPARATOR_PATTERN: &str = r"### *[\n\r]*S/S";
const TAGGED_HASH_SEPARATOR: &str = "S/S #/PUNC #/PUNC #/PUNC";

static SECTION: OnceLock<Regex> = OnceLock::new();
static TAGGED_PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
static HASH_SEPARATOR: OnceLock<Regex> = OnceLock::new();
static STRAY_SYMBOLS: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in pattern is valid"))
}

/// Text prepared for the tagger with its non-Arabic sections cut out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSections {
    /// Text with one placeholder line per section
    pub text: String,
    /// The removed sections, in order of appearance
    pub sections: Vec<String>,
}

/// Drop non-Arabic sections ahead of tagging
///
/// Each section becomes a line break, `#`, `|` and `$` are deleted, lines are
/// trimmed and empty lines removed.
pub fn ditch_sections(text: &str) -> String {
    let without_sections = regex(&SECTION, SECTION_PATTERN).replace_all(text, "\n");
    let cleaned = regex(&STRAY_SYMBOLS, r"[#|$]").replace_all(&without_sections, "");

    cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut non-Arabic sections out, leaving a placeholder line for each
pub fn extract_sections(text: &str) -> ExtractedSections {
    let section = regex(&SECTION, SECTION_PATTERN);
    let sections = section
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let replacement = format!("\n{PLACEHOLDER}\n");
    let text = section.replace_all(text, replacement.as_str()).into_owned();

    ExtractedSections { text, sections }
}

/// Put the sections back in place of the tagged placeholders
pub fn restore_sections(tagged: &str, sections: &[String]) -> String {
    let mut next = 0;
    let restored = regex(&TAGGED_PLACEHOLDER, TAGGED_PLACEHOLDER_PATTERN).replace_all(
        tagged,
        |_: &regex::Captures<'_>| {
            let section = sections.get(next).cloned().unwrap_or_default();
            next += 1;
            section
        },
    );

    if next != sections.len() {
        log::warn!(
            "Tagged output has {next} placeholders for {} non-Arabic sections",
            sections.len()
        );
    }

    regex(&HASH_SEPARATOR, HASH_SEPARATOR_PATTERN)
        .replace_all(&restored, TAGGED_HASH_SEPARATOR)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "قال الرجل\nThe quick brown fox.\nثم ذهب";

    #[test]
    fn test_short_latin_is_not_a_section() {
        let extracted = extract_sections("كتاب abc كتاب");
        assert!(extracted.sections.is_empty());
        assert_eq!(extracted.text, "كتاب abc كتاب");
    }

    #[test]
    fn test_extract_sections() {
        let extracted = extract_sections(MIXED);
        assert_eq!(extracted.sections.len(), 1);
        assert!(extracted.sections[0].contains("The quick brown fox."));
        assert!(extracted.text.contains("\nµµµ\n"));
        assert!(!extracted.text.contains("quick"));
        assert!(extracted.text.starts_with("قال الرجل"));
        assert!(extracted.text.ends_with("ثم ذهب"));
    }

    #[test]
    fn test_ditch_sections() {
        assert_eq!(ditch_sections(MIXED), "قال الرجل\nثم ذهب");
    }

    #[test]
    fn test_ditch_removes_stray_symbols() {
        assert_eq!(ditch_sections("  كتاب # | $ \n\n قلم "), "كتاب\nقلم");
    }

    #[test]
    fn test_restore_sections_in_order() {
        let tagged = "S/S قال/V E/E\nS/S µ/PUNC µ/PUNC µ/PUNC E/E\nS/S ذهب/V E/E\nS/S µ/PUNC µ/PUNC µ/PUNC E/E";
        let sections = vec!["first part".to_string(), "second part".to_string()];
        let restored = restore_sections(tagged, &sections);
        assert_eq!(
            restored,
            "S/S قال/V E/Efirst partS/S ذهب/V E/Esecond part"
        );
    }

    #[test]
    fn test_restore_with_missing_sections() {
        let tagged = "S/S µ/PUNC µ/PUNC µ/PUNC E/E\nS/S ذهب/V E/E";
        assert_eq!(restore_sections(tagged, &[]), "S/S ذهب/V E/E");
    }

    #[test]
    fn test_restore_braces_are_literal() {
        let tagged = "S/S µ/PUNC µ/PUNC µ/PUNC E/E";
        let sections = vec!["{0} {}".to_string()];
        assert_eq!(restore_sections(tagged, &sections), "{0} {}");
    }

    #[test]
    fn test_hash_separator_rewritten() {
        let tagged = "###  \nS/S كتاب/NOUN E/E";
        assert_eq!(
            restore_sections(tagged, &[]),
            "S/S #/PUNC #/PUNC #/PUNC كتاب/NOUN E/E"
        );
    }
}
