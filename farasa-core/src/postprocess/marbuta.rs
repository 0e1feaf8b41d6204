//! Ta-marbuta restoration
//!
//! The segmenter treats a word-final ة as a suffix and splits it off the
//! stem (`ال+كتاب+ة`). Restoration glues it back on, whether it was split
//! off with the affix marker or as a separate whitespace-delimited token.

use super::script::is_arabic;
use super::AFFIX_MARKER;

/// The ta-marbuta letter
pub const TA_MARBUTA: char = 'ة';

const TA_MARBUTA_STR: &str = "ة";

/// Reattach every split-off ta marbuta to the token before it
pub fn restore_ta_marbuta(text: &str) -> String {
    let mut marked = String::with_capacity(2 * TA_MARBUTA.len_utf8());
    marked.push(AFFIX_MARKER);
    marked.push(TA_MARBUTA);

    let joined = text.replace(&marked, TA_MARBUTA_STR);

    let mut out = String::with_capacity(joined.len());
    for (i, line) in joined.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&merge_standalone(line));
    }
    out
}

/// Merge a standalone `ة` token onto the preceding token of the line
///
/// Tokens are separated by runs of whitespace. The separator in front of a
/// merged `ة` is dropped, every other separator is kept as is.
fn merge_standalone(line: &str) -> String {
    let mut pieces: Vec<String> = Vec::new();

    for piece in split_keeping_whitespace(line) {
        if piece == TA_MARBUTA_STR && follows_arabic_stem(&pieces) {
            pieces.pop();
            if let Some(stem) = pieces.last_mut() {
                stem.push_str(piece);
            }
            continue;
        }
        pieces.push(piece.to_string());
    }

    pieces.concat()
}

/// Whether `pieces` ends with an Arabic word followed by whitespace
fn follows_arabic_stem(pieces: &[String]) -> bool {
    match pieces {
        [.., stem, sep] => is_blank(sep) && stem.chars().last().is_some_and(is_arabic),
        _ => false,
    }
}

fn is_blank(piece: &str) -> bool {
    piece.chars().all(char::is_whitespace)
}

/// Split `line` into alternating word and whitespace runs
fn split_keeping_whitespace(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            pieces.push(&line[start..i]);
            start = i;
        }
        in_space = Some(space);
    }
    if start < line.len() {
        pieces.push(&line[start..]);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_form() {
        assert_eq!(restore_ta_marbuta("ال+كتاب+ة"), "ال+كتابة");
        assert_eq!(restore_ta_marbuta("جميل+ة"), "جميلة");
    }

    #[test]
    fn test_standalone_token() {
        assert_eq!(restore_ta_marbuta("الكتاب ة"), "الكتابة");
        assert_eq!(restore_ta_marbuta("الكتاب +ة"), "الكتابة");
    }

    #[test]
    fn test_standalone_token_after_wider_gap() {
        assert_eq!(restore_ta_marbuta("الكتاب  ة"), "الكتابة");
        assert_eq!(restore_ta_marbuta("الكتاب\tة"), "الكتابة");
        assert_eq!(restore_ta_marbuta("الكتاب \t +ة جميل"), "الكتابة جميل");
    }

    #[test]
    fn test_other_spacing_preserved() {
        assert_eq!(restore_ta_marbuta("  قال\tالرجل  ة  "), "  قال\tالرجلة  ");
    }

    #[test]
    fn test_several_lines() {
        let input = "ال+كتاب+ة جميل+ة\nمدرس ة كبير+ة";
        assert_eq!(restore_ta_marbuta(input), "ال+كتابة جميلة\nمدرسة كبيرة");
    }

    #[test]
    fn test_leading_marbuta_left_alone() {
        assert_eq!(restore_ta_marbuta("ة كتاب"), "ة كتاب");
    }

    #[test]
    fn test_after_non_arabic_token_left_alone() {
        assert_eq!(restore_ta_marbuta("ABC ة"), "ABC ة");
    }

    #[test]
    fn test_crlf_line_ending() {
        assert_eq!(restore_ta_marbuta("الكتاب ة\r\nنص"), "الكتابة\r\nنص");
    }

    #[test]
    fn test_no_marbuta() {
        let input = "و+قال ال+رجل";
        assert_eq!(restore_ta_marbuta(input), input);
    }
}
