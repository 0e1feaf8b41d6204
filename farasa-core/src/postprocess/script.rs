//! Arabic script filtering

/// Unicode blocks holding Arabic script
const ARABIC_RANGES: [(char, char); 5] = [
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{0750}', '\u{077F}'), // Arabic Supplement
    ('\u{08A0}', '\u{08FF}'), // Arabic Extended-A
    ('\u{FB50}', '\u{FDFF}'), // Arabic Presentation Forms-A
    ('\u{FE70}', '\u{FEFF}'), // Arabic Presentation Forms-B
];

/// Whether `ch` belongs to one of the Arabic Unicode blocks
pub fn is_arabic(ch: char) -> bool {
    ARABIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&ch))
}

/// Whether `ch` survives [`strip_non_arabic`]
fn is_kept(ch: char) -> bool {
    is_arabic(ch) || ch.is_whitespace() || ch.is_ascii_punctuation()
}

/// Remove every character outside the Arabic blocks
///
/// Whitespace and ASCII punctuation (including the affix marker) are kept.
/// Blank runs left behind collapse to a single space and lines are trimmed.
/// Lines emptied by the filter are dropped; lines that were blank to begin
/// with stay, so paragraph breaks survive.
pub fn strip_non_arabic(text: &str) -> String {
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut cleaned = String::with_capacity(line.len());
        let mut pending_space = false;

        for ch in line.chars().filter(|&ch| is_kept(ch)) {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(ch);
        }

        if !cleaned.is_empty() || line.trim().is_empty() {
            lines.push(cleaned);
        }
    }

    let mut out = lines.join("\n");
    if text.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_arabic() {
        assert!(is_arabic('ك'));
        assert!(is_arabic('ة'));
        assert!(is_arabic('٣')); // Arabic-Indic digit
        assert!(is_arabic('،')); // Arabic comma
        assert!(is_arabic('ﻻ')); // presentation form
        assert!(!is_arabic('a'));
        assert!(!is_arabic('3'));
        assert!(!is_arabic('א'));
    }

    #[test]
    fn test_strip_latin_words() {
        assert_eq!(
            strip_non_arabic("قال Smith إن ال+كتاب"),
            "قال إن ال+كتاب"
        );
    }

    #[test]
    fn test_keeps_punctuation() {
        assert_eq!(strip_non_arabic("ما هذا؟ (نص) 2024."), "ما هذا؟ (نص) .");
    }

    #[test]
    fn test_drops_emptied_lines() {
        let input = "مرحبا\nHello world\nعالم\n";
        assert_eq!(strip_non_arabic(input), "مرحبا\nعالم\n");
    }

    #[test]
    fn test_keeps_paragraph_breaks() {
        assert_eq!(strip_non_arabic("مرحبا\n\nعالم"), "مرحبا\n\nعالم");
        assert_eq!(
            strip_non_arabic("مرحبا\n  \nHello\nعالم\n"),
            "مرحبا\n\nعالم\n"
        );
    }

    #[test]
    fn test_only_non_arabic() {
        assert_eq!(strip_non_arabic("English only\n"), "");
    }

    #[test]
    fn test_output_is_arabic_only() {
        let input = "Die Stadt المدينة الكبيرة 1990 und الناس";
        let out = strip_non_arabic(input);
        assert!(out
            .chars()
            .all(|ch| is_arabic(ch) || ch.is_whitespace() || ch.is_ascii_punctuation()));
        assert_eq!(out, "المدينة الكبيرة الناس");
    }
}
