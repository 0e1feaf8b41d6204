//! Single-file or directory mode

use crate::error::CliError;
use anyhow::Result;
use std::path::Path;

/// What the input path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single text file
    File,
    /// A folder of text files, processed in batch
    Directory,
}

impl InputKind {
    /// Classify `path`, failing when it does not exist
    pub fn classify(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Ok(InputKind::Directory)
        } else if path.is_file() {
            Ok(InputKind::File)
        } else {
            Err(CliError::InputNotFound(path.display().to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "نص").unwrap();

        assert_eq!(InputKind::classify(&file_path).unwrap(), InputKind::File);
    }

    #[test]
    fn test_classify_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            InputKind::classify(temp_dir.path()).unwrap(),
            InputKind::Directory
        );
    }

    #[test]
    fn test_classify_missing() {
        let err = InputKind::classify(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputNotFound(_))
        ));
    }
}
