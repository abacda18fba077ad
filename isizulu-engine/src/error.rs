//! Layered error types
//!
//! Analysis itself cannot fail; these errors come from the layers around
//! it: request validation, document extraction and export.

use isizulu_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Request payload is missing or has the wrong shape
    #[error("invalid input: {0}")]
    InputValidation(String),

    /// A document's bytes could not be turned into text
    #[error("failed to extract text from {file}: {message}")]
    Extraction {
        /// Name of the file being extracted
        file: String,
        /// Human-readable reason
        message: String,
    },

    /// No extractor handles this file extension
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Requested export format does not exist
    #[error("unsupported export format: {0}")]
    ExportFormat(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Rule tables or analyzer setup failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl EngineError {
    /// Extraction failure for a named file
    pub fn extraction(file: impl Into<String>, message: impl ToString) -> Self {
        EngineError::Extraction {
            file: file.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_display() {
        let err = EngineError::extraction("report.pdf", "corrupt xref table");
        assert_eq!(
            err.to_string(),
            "failed to extract text from report.pdf: corrupt xref table"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = EngineError::UnsupportedFileType("xlsx".to_string());
        assert_eq!(err.to_string(), "unsupported file type: xlsx");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: EngineError = CoreError::InvalidConfig("bad".to_string()).into();
        assert_eq!(err.to_string(), "invalid rule tables: bad");
    }
}
