//! Error type shared by the header readers and the policy loader.
use std::path::Path;

use thiserror::Error;

/// Main error type for filesig operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error without path context (e.g. reading from an arbitrary reader)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error while opening or reading a specific file
    #[error("IO error accessing path '{path}': {source}")]
    FileAccess {
        /// The path that could not be read.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Upload policy is structurally valid YAML but semantically unusable
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Upload policy could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for filesig operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Wraps an `std::io::Error` with the path it occurred on.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileAccess {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_with_path_keeps_context() {
        let source = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source, "uploads/cv.pdf");

        match &err {
            Error::FileAccess { path, source } => {
                assert_eq!(path, "uploads/cv.pdf");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "IO error accessing path 'uploads/cv.pdf': File not found"
        );
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short read"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(Error::Io(_))));
    }
}
