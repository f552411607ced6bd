//! Error types for the modoc library.
//!
//! The rendering pipeline itself is total: coercion, segmentation,
//! tokenization, and tree building never fail on malformed input. Errors
//! exist only at the outer surface where the crate touches files, readers,
//! and serializers.

use std::io;
use thiserror::Error;

/// Result type alias for modoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the rendering pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text is not valid JSON. Structurally wrong but
    /// syntactically valid JSON never produces this; it is coerced.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Error serializing a rendered tree (JSON output).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Render("bad tree".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad tree");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON input:"));
    }
}
