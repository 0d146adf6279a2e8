//! Error types for the leaflabel library.

use std::io;
use thiserror::Error;

/// Result type alias for leaflabel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing a label.
///
/// Heuristic steps never fail: a step that finds nothing leaves its result
/// field absent. Only the inputs crossing the trust boundary (the OCR call
/// and a structurally empty document) abort a parse.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing an OCR document or reference-data payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The OCR document contains no pages or no detected words.
    #[error("OCR document contains no detected text")]
    EmptyDocument,

    /// The external OCR capability failed or timed out.
    #[error("OCR backend error: {0}")]
    Ocr(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDocument;
        assert_eq!(err.to_string(), "OCR document contains no detected text");

        let err = Error::Ocr("deadline exceeded".to_string());
        assert_eq!(err.to_string(), "OCR backend error: deadline exceeded");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
