//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// A required argument was neither given nor entered interactively
    MissingArgument(String),
    /// The requested function is not `segment` or `POS_tag`
    UnknownFunction(String),
    /// Input path is neither a file nor a directory
    InputNotFound(String),
    /// Some files of a directory run failed
    BatchFailed {
        /// Number of failed files
        failed: usize,
        /// Number of files attempted
        total: usize,
        /// One line per failed file
        details: Vec<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingArgument(arg) => write!(f, "Missing argument: {arg}"),
            CliError::UnknownFunction(func) => {
                write!(f, "Unknown function: {func} (expected `segment` or `POS_tag`)")
            }
            CliError::InputNotFound(path) => write!(f, "No such file or folder: {path}"),
            CliError::BatchFailed {
                failed,
                total,
                details,
            } => {
                write!(f, "{failed} of {total} files failed")?;
                for line in details {
                    write!(f, "\n  {line}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
