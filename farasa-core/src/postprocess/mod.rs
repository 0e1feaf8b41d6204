//! Textual post-processing of toolkit output
//!
//! The steps run in a fixed order: ta-marbuta restoration first (it needs the
//! affix markers), then script filtering, then delimiter insertion (which
//! replaces the markers).

pub mod delimiter;
pub mod marbuta;
pub mod script;
pub mod sections;

pub use delimiter::insert_delimiter;
pub use marbuta::{restore_ta_marbuta, TA_MARBUTA};
pub use script::{is_arabic, strip_non_arabic};
pub use sections::{ditch_sections, extract_sections, restore_sections, ExtractedSections};

use crate::config::SegmentOptions;

/// Marker the segmenter puts between a word and its affixes
pub const AFFIX_MARKER: char = '+';

/// Post-processing pipeline for segmenter output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcessor {
    restore_ta_marbuta: bool,
    ditch_non_arabic: bool,
    split_char: Option<String>,
}

impl PostProcessor {
    /// A processor that leaves text unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Reattach split-off ta marbuta
    pub fn restore_ta_marbuta(mut self, enabled: bool) -> Self {
        self.restore_ta_marbuta = enabled;
        self
    }

    /// Drop characters outside the Arabic script
    pub fn ditch_non_arabic(mut self, enabled: bool) -> Self {
        self.ditch_non_arabic = enabled;
        self
    }

    /// Replace affix markers with `split_char`
    pub fn split_char(mut self, split_char: Option<String>) -> Self {
        self.split_char = split_char.filter(|s| !s.is_empty());
        self
    }

    /// Whether [`apply`](Self::apply) would change anything
    pub fn is_noop(&self) -> bool {
        !self.restore_ta_marbuta
            && !self.ditch_non_arabic
            && self
                .split_char
                .as_deref()
                .map_or(true, |s| s.len() == 1 && s.starts_with(AFFIX_MARKER))
    }

    /// Run the enabled steps over `text`
    pub fn apply(&self, text: &str) -> String {
        if self.is_noop() {
            return text.to_string();
        }

        let mut out = text.to_string();
        if self.restore_ta_marbuta {
            out = restore_ta_marbuta(&out);
        }
        if self.ditch_non_arabic {
            out = strip_non_arabic(&out);
        }
        if let Some(split_char) = &self.split_char {
            out = insert_delimiter(&out, split_char);
        }
        out
    }
}

impl From<&SegmentOptions> for PostProcessor {
    fn from(options: &SegmentOptions) -> Self {
        PostProcessor::new()
            .restore_ta_marbuta(options.restore_ta_marbuta)
            .ditch_non_arabic(options.ditch_non_arabic)
            .split_char(options.split_char.clone())
    }
}
