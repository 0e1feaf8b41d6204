//! Layered error types
//!
//! Failures of the external toolkit are kept apart from the file and
//! configuration errors of the wrapper itself, so callers can tell a broken
//! Java/Farasa installation from a bad input path.

use crate::invoker::Tool;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures of the external Farasa process
#[derive(Error, Debug)]
pub enum ExternalToolError {
    /// The Java runtime could not be found
    #[error("`{program}` could not be found")]
    RuntimeNotFound {
        /// The program that was looked up
        program: String,
    },

    /// The jar file for the requested tool does not exist
    #[error("{tool} jar not found at '{}'", .path.display())]
    JarNotFound {
        /// The tool whose jar is missing
        tool: Tool,
        /// Where the jar was expected
        path: PathBuf,
    },

    /// The process could not be started for another reason
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// The program that failed to start
        program: String,
        /// The underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The process ran but reported failure
    #[error("{tool} exited with {status}{}", format_stderr(.stderr))]
    NonZeroExit {
        /// The tool that failed
        tool: Tool,
        /// Exit status of the process
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The process wrote something that is not UTF-8
    #[error("{tool} produced output that is not valid UTF-8")]
    InvalidOutput {
        /// The tool whose output could not be decoded
        tool: Tool,
        /// The decoding error
        #[source]
        source: FromUtf8Error,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Errors surfaced by every public operation of this crate
#[derive(Error, Debug)]
pub enum FarasaError {
    /// The external toolkit failed
    #[error("external tool error: {0}")]
    ExternalTool(#[from] ExternalToolError),

    /// The input path does not exist
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Reading or writing a file failed
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl FarasaError {
    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FarasaError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error originates from the external toolkit
    pub fn is_external_tool(&self) -> bool {
        matches!(self, FarasaError::ExternalTool(_))
    }
}

/// Result type for farasa operations
pub type Result<T> = std::result::Result<T, FarasaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_not_found_display() {
        let error: FarasaError = ExternalToolError::RuntimeNotFound {
            program: "java".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "external tool error: `java` could not be found"
        );
        assert!(error.is_external_tool());
    }

    #[test]
    fn test_jar_not_found_display() {
        let error = ExternalToolError::JarNotFound {
            tool: Tool::Segmenter,
            path: PathBuf::from("dist/FarasaSegmenterJar.jar"),
        };
        assert_eq!(
            error.to_string(),
            "segmenter jar not found at 'dist/FarasaSegmenterJar.jar'"
        );
    }

    #[test]
    fn test_file_not_found_display() {
        let error = FarasaError::FileNotFound {
            path: PathBuf::from("نص/test.txt"),
        };
        assert_eq!(error.to_string(), "file not found: نص/test.txt");
        assert!(!error.is_external_tool());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let error = FarasaError::io(
            "out.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.to_string().starts_with("I/O error for 'out.txt'"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_format_stderr() {
        assert_eq!(format_stderr(""), "");
        assert_eq!(format_stderr("boom"), ": boom");
    }
}
