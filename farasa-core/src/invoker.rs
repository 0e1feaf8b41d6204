//! External process invocation
//!
//! The Farasa jars read a file given with `-i` and print their result on
//! standard output. [`JarRunner`] drives them through a Java runtime; the
//! [`ToolRunner`] trait lets the pipeline run against anything else that
//! produces the same output.

use crate::config::ToolkitConfig;
use crate::error::ExternalToolError;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// Maximum number of stderr lines kept in a failure report
const STDERR_TAIL_LINES: usize = 20;

/// The Farasa programs this crate knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Splits words into prefix, stem and suffix, marking affixes with `+`
    Segmenter,
    /// Annotates tokens with part-of-speech labels
    PosTagger,
}

impl Tool {
    /// Short human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Segmenter => "segmenter",
            Tool::PosTagger => "POS tagger",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs a Farasa tool on an input file and returns what it printed
pub trait ToolRunner {
    /// Run `tool` on `input` and capture its standard output
    fn run(&self, tool: Tool, input: &Path) -> Result<String, ExternalToolError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, tool: Tool, input: &Path) -> Result<String, ExternalToolError> {
        (**self).run(tool, input)
    }
}

impl<R: ToolRunner + ?Sized> ToolRunner for Box<R> {
    fn run(&self, tool: Tool, input: &Path) -> Result<String, ExternalToolError> {
        (**self).run(tool, input)
    }
}

/// Runner that launches the Farasa jars with `java -jar`
#[derive(Debug, Clone, Default)]
pub struct JarRunner {
    toolkit: ToolkitConfig,
}

impl JarRunner {
    /// Create a runner for the given toolkit layout
    pub fn new(toolkit: ToolkitConfig) -> Self {
        Self { toolkit }
    }

    /// The toolkit layout in use
    pub fn toolkit(&self) -> &ToolkitConfig {
        &self.toolkit
    }

    /// Build the command line for `tool` without running it
    pub fn command(&self, tool: Tool, input: &Path) -> Command {
        let mut cmd = Command::new(&self.toolkit.java);
        cmd.args(&self.toolkit.java_options)
            .arg("-jar")
            .arg(self.toolkit.jar_path(tool))
            .arg("-i")
            .arg(input);
        cmd
    }
}

impl ToolRunner for JarRunner {
    fn run(&self, tool: Tool, input: &Path) -> Result<String, ExternalToolError> {
        let jar = self.toolkit.jar_path(tool);
        if !jar.is_file() {
            return Err(ExternalToolError::JarNotFound { tool, path: jar });
        }

        let mut cmd = self.command(tool, input);
        log::debug!("Running {tool}: {cmd:?}");

        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ExternalToolError::RuntimeNotFound {
                    program: self.toolkit.java.clone(),
                },
                _ => ExternalToolError::Launch {
                    program: self.toolkit.java.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(ExternalToolError::NonZeroExit {
                tool,
                status: output.status,
                stderr: stderr_tail(&output.stderr),
            });
        }

        if !output.stderr.is_empty() {
            log::debug!("{tool} stderr: {}", stderr_tail(&output.stderr));
        }

        String::from_utf8(output.stdout)
            .map_err(|source| ExternalToolError::InvalidOutput { tool, source })
    }
}

/// Last lines of a captured stderr stream, lossily decoded
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.trim().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
