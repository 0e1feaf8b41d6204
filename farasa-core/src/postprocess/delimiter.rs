//! Affix delimiter insertion

use super::AFFIX_MARKER;

/// Replace the segmenter's affix marker with `split_char`
///
/// An empty delimiter leaves the text untouched.
pub fn insert_delimiter(text: &str, split_char: &str) -> String {
    if split_char.is_empty() {
        return text.to_string();
    }
    text.replace(AFFIX_MARKER, split_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char() {
        assert_eq!(insert_delimiter("و+ال+كتاب", "_"), "و_ال_كتاب");
    }

    #[test]
    fn test_multi_char_delimiter() {
        assert_eq!(insert_delimiter("ال+كتاب+ان", " + "), "ال + كتاب + ان");
    }

    #[test]
    fn test_empty_delimiter_is_noop() {
        assert_eq!(insert_delimiter("ال+كتاب", ""), "ال+كتاب");
    }

    #[test]
    fn test_text_without_markers() {
        assert_eq!(insert_delimiter("كتاب", "|"), "كتاب");
    }
}
