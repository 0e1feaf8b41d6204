//! Directory processing
//!
//! Applies a single-file operation to every regular file directly inside an
//! input directory, writing a same-named file into the output directory.
//! Sub-directories are not descended into.

use crate::config::BatchPolicy;
use crate::error::{FarasaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A file the operation failed on
#[derive(Debug)]
pub struct BatchFailure {
    /// The input file
    pub input: PathBuf,
    /// Why it failed
    pub error: FarasaError,
}

/// Outcome of a directory run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in processing order
    pub processed: Vec<PathBuf>,
    /// Directory entries that are not regular files
    pub skipped: Vec<PathBuf>,
    /// Files the operation failed on
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Whether every file was processed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files the operation was attempted on
    pub fn attempted(&self) -> usize {
        self.processed.len() + self.failures.len()
    }
}

/// Regular files directly inside `input_dir`, sorted by path
pub fn collect_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(scan_dir(input_dir)?.0)
}

fn scan_dir(input_dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    if !input_dir.is_dir() {
        return Err(FarasaError::FileNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(|e| FarasaError::io(input_dir, e))? {
        let path = entry.map_err(|e| FarasaError::io(input_dir, e))?.path();
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("Skipping non-file entry: {}", path.display());
            skipped.push(path);
        }
    }

    files.sort();
    skipped.sort();
    Ok((files, skipped))
}

/// Run `process(input, output)` for every file of `input_dir`
///
/// The output directory is created when missing. Under
/// [`BatchPolicy::BestEffort`] a failing file is logged and recorded in the
/// report; under [`BatchPolicy::FailFast`] its error is returned at once.
pub fn batch_process<F>(
    input_dir: &Path,
    output_dir: &Path,
    policy: BatchPolicy,
    process: F,
) -> Result<BatchReport>
where
    F: FnMut(&Path, &Path) -> Result<()>,
{
    let (files, skipped) = scan_dir(input_dir)?;
    log::info!(
        "Processing {} files from {} into {}",
        files.len(),
        input_dir.display(),
        output_dir.display()
    );

    let mut report = process_files(&files, output_dir, policy, process)?;
    report.skipped = skipped;
    Ok(report)
}

/// Run `process(input, output)` for each of `files`, as collected by
/// [`collect_input_files`]
///
/// Same policy handling as [`batch_process`], without scanning the
/// directory again.
pub fn process_files<F>(
    files: &[PathBuf],
    output_dir: &Path,
    policy: BatchPolicy,
    mut process: F,
) -> Result<BatchReport>
where
    F: FnMut(&Path, &Path) -> Result<()>,
{
    fs::create_dir_all(output_dir).map_err(|e| FarasaError::io(output_dir, e))?;

    let mut report = BatchReport::default();

    for input in files {
        let Some(name) = input.file_name() else {
            continue;
        };
        let output = output_dir.join(name);
        log::info!("Processing: {}", input.display());

        match process(input, &output) {
            Ok(()) => report.processed.push(output),
            Err(error) => match policy {
                BatchPolicy::FailFast => return Err(error),
                BatchPolicy::BestEffort => {
                    log::error!("Error processing {}: {error}", input.display());
                    report.failures.push(BatchFailure {
                        input: input.clone(),
                        error,
                    });
                }
            },
        }
    }

    log::info!(
        "Batch complete: {} processed, {} failed",
        report.processed.len(),
        report.failures.len()
    );

    Ok(report)
}
