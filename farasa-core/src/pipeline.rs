//! Single-file operations
//!
//! Each operation reads one input file through the toolkit, post-processes
//! the result in memory and writes the output file once at the end, so a
//! failed run never leaves a partial output behind.

use crate::batch::{self, BatchReport};
use crate::config::{BatchPolicy, FarasaConfig, PosTagOptions, SegmentOptions, ToolkitConfig};
use crate::error::{FarasaError, Result};
use crate::invoker::{JarRunner, Tool, ToolRunner};
use crate::postprocess::{ditch_sections, extract_sections, restore_sections, PostProcessor};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// An operation together with its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Split words into affixes and stems
    Segment(SegmentOptions),
    /// Tag parts of speech
    PosTag(PosTagOptions),
}

impl Operation {
    /// The toolkit program the operation runs
    pub fn tool(&self) -> Tool {
        match self {
            Operation::Segment(_) => Tool::Segmenter,
            Operation::PosTag(_) => Tool::PosTagger,
        }
    }

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Segment(_) => "segment",
            Operation::PosTag(_) => "POS_tag",
        }
    }
}

/// Entry point to the Farasa toolkit
///
/// Generic over the [`ToolRunner`] so that everything above the subprocess
/// boundary can run without a Java installation.
#[derive(Debug, Clone)]
pub struct Farasa<R = JarRunner> {
    runner: R,
}

impl Farasa<JarRunner> {
    /// Use the jars in `./dist` through `java` on PATH
    pub fn new() -> Self {
        Self::with_runner(JarRunner::default())
    }

    /// Use the given toolkit layout
    pub fn with_toolkit(toolkit: ToolkitConfig) -> Self {
        Self::with_runner(JarRunner::new(toolkit))
    }

    /// Use the toolkit section of a loaded configuration
    pub fn from_config(config: &FarasaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_toolkit(config.toolkit.clone()))
    }
}

impl Default for Farasa<JarRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ToolRunner> Farasa<R> {
    /// Drive the toolkit through a custom runner
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// The runner in use
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Segment `input` and write the post-processed result to `output`
    pub fn segment(&self, input: &Path, output: &Path, options: &SegmentOptions) -> Result<()> {
        let text = self.segment_to_string(input, options)?;
        write_output(output, &text)
    }

    /// Segment `input` and return the post-processed result
    pub fn segment_to_string(&self, input: &Path, options: &SegmentOptions) -> Result<String> {
        ensure_input(input)?;
        let raw = self.runner.run(Tool::Segmenter, input)?;
        Ok(PostProcessor::from(options).apply(&raw))
    }

    /// POS-tag `input` and write the result to `output`
    pub fn pos_tag(&self, input: &Path, output: &Path, options: &PosTagOptions) -> Result<()> {
        let text = self.pos_tag_to_string(input, options)?;
        write_output(output, &text)
    }

    /// POS-tag `input` and return the result
    ///
    /// Unless both `only_arabic` and `ditch_non_arabic` are off, the tagger
    /// runs on a scratch copy with the non-Arabic sections removed.
    pub fn pos_tag_to_string(&self, input: &Path, options: &PosTagOptions) -> Result<String> {
        ensure_input(input)?;

        if !options.only_arabic && !options.ditch_non_arabic {
            return Ok(self.runner.run(Tool::PosTagger, input)?);
        }

        let text = fs::read_to_string(input).map_err(|e| FarasaError::io(input, e))?;
        if options.ditch_non_arabic {
            let scratch = scratch_file(&ditch_sections(&text))?;
            return Ok(self.runner.run(Tool::PosTagger, scratch.path())?);
        }

        let extracted = extract_sections(&text);
        log::debug!(
            "Cut {} non-Arabic sections out of {}",
            extracted.sections.len(),
            input.display()
        );
        let scratch = scratch_file(&extracted.text)?;
        let tagged = self.runner.run(Tool::PosTagger, scratch.path())?;
        Ok(restore_sections(&tagged, &extracted.sections))
    }

    /// Run `operation` on a single file
    pub fn run(&self, operation: &Operation, input: &Path, output: &Path) -> Result<()> {
        match operation {
            Operation::Segment(options) => self.segment(input, output, options),
            Operation::PosTag(options) => self.pos_tag(input, output, options),
        }
    }

    /// Run `operation` on every file of `input_dir`
    pub fn batch_process(
        &self,
        operation: &Operation,
        input_dir: &Path,
        output_dir: &Path,
        policy: BatchPolicy,
    ) -> Result<BatchReport> {
        batch::batch_process(input_dir, output_dir, policy, |input, output| {
            self.run(operation, input, output)
        })
    }
}

fn ensure_input(input: &Path) -> Result<()> {
    if input.is_file() {
        Ok(())
    } else {
        Err(FarasaError::FileNotFound {
            path: input.to_path_buf(),
        })
    }
}

fn write_output(output: &Path, text: &str) -> Result<()> {
    fs::write(output, text).map_err(|e| FarasaError::io(output, e))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

/// Temporary input file for the tagger, removed when dropped
fn scratch_file(text: &str) -> Result<NamedTempFile> {
    let temp_dir = std::env::temp_dir();
    let mut file = tempfile::Builder::new()
        .prefix("farasa-")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| FarasaError::io(&temp_dir, e))?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| FarasaError::io(file.path(), e))?;
    Ok(file)
}
