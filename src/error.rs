//! Error types for linch-md2docx

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid heading level {0} (expected 1-4)")]
    InvalidHeadingLevel(u8),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl Error {
    /// Whether this error belongs to the input I/O class
    /// (missing, unreadable or undecodable source file).
    pub fn is_io(&self) -> bool {
        matches!(self, Error::ReadInput { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_is_io_class() {
        let err = Error::ReadInput {
            path: PathBuf::from("missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_io());
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_generic_errors_are_not_io_class() {
        assert!(!Error::InvalidHeadingLevel(7).is_io());
        assert!(!Error::InvalidDocument("x".into()).is_io());
    }
}
