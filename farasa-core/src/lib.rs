//! Arabic segmentation and POS tagging through the Farasa toolkit
//!
//! This crate drives the Farasa command-line jars as subprocesses and cleans
//! up what they print: split-off ta marbuta can be reattached, non-Arabic
//! text removed, and the segmenter's `+` affix marker replaced by any
//! delimiter. Whole directories can be processed in one call.
//!
//! # Architecture
//!
//! - **invoker**: runs a jar on an input file and captures its output
//! - **postprocess**: pure string transformations of that output
//! - **pipeline**: single-file operations tying the two together
//! - **batch**: directory iteration on top of the single-file operations
//!
//! # Example
//!
//! ```rust,no_run
//! use farasa_core::{Farasa, SegmentOptions};
//! use std::path::Path;
//!
//! let farasa = Farasa::new();
//! let options = SegmentOptions::restore_ta_marbuta(true).with_split_char("_");
//! farasa
//!     .segment(Path::new("test.txt"), Path::new("test_segmented.txt"), &options)
//!     .unwrap();
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod invoker;
pub mod pipeline;
pub mod postprocess;

pub use batch::{BatchFailure, BatchReport};
pub use config::{
    BatchConfig, BatchPolicy, FarasaConfig, PosTagOptions, SegmentOptions, ToolkitConfig,
};
pub use error::{ExternalToolError, FarasaError, Result};
pub use invoker::{JarRunner, Tool, ToolRunner};
pub use pipeline::{Farasa, Operation};
pub use postprocess::PostProcessor;

use std::path::Path;

// Convenience functions using the default toolkit layout

/// Segment a file, optionally reattaching split-off ta marbuta
pub fn segment<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    restore_ta_marbuta: bool,
) -> Result<()> {
    Farasa::new().segment(
        input.as_ref(),
        output.as_ref(),
        &SegmentOptions::restore_ta_marbuta(restore_ta_marbuta),
    )
}

/// POS-tag a file, optionally dropping non-Arabic text first
pub fn pos_tag<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    ditch_non_arabic: bool,
) -> Result<()> {
    Farasa::new().pos_tag(
        input.as_ref(),
        output.as_ref(),
        &PosTagOptions::ditch_non_arabic(ditch_non_arabic),
    )
}

/// Apply `operation` to every file of a directory, best-effort
pub fn batch_process<P: AsRef<Path>, Q: AsRef<Path>>(
    operation: &Operation,
    input_dir: P,
    output_dir: Q,
) -> Result<BatchReport> {
    Farasa::new().batch_process(
        operation,
        input_dir.as_ref(),
        output_dir.as_ref(),
        BatchPolicy::BestEffort,
    )
}
