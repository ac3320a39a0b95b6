//! Error types for HashCheck
//!
//! Every failure in the digest service and the benchmark harness surfaces
//! through [`HashCheckError`]; nothing is caught, converted, or retried
//! inside the core.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for HashCheck operations
#[derive(Error, Debug)]
pub enum HashCheckError {
    /// I/O error while opening or streaming a file
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// Path of the file that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Algorithm name not present in the registry
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Invalid combination of input-source arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl HashCheckError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Raised when both `data` and `file_path` are supplied
    pub fn conflicting_inputs() -> Self {
        Self::InvalidArgument("only one input source allowed".to_string())
    }

    /// Raised when neither `data` nor `file_path` is supplied
    pub fn missing_input() -> Self {
        Self::InvalidArgument("an input source is required".to_string())
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for HashCheck operations
pub type Result<T> = std::result::Result<T, HashCheckError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| HashCheckError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HashCheckError::io("/test/path", io_err);
        assert!(err.path().is_some());
        assert_eq!(err.path().unwrap(), &PathBuf::from("/test/path"));
    }

    #[test]
    fn test_argument_error_messages() {
        assert_eq!(
            HashCheckError::conflicting_inputs().to_string(),
            "Invalid argument: only one input source allowed"
        );
        assert_eq!(
            HashCheckError::missing_input().to_string(),
            "Invalid argument: an input source is required"
        );
        assert!(HashCheckError::missing_input().path().is_none());
    }
}
