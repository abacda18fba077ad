//! Error types for rule-table loading and analyzer setup
//!
//! Segmentation itself is total over strings and never produces an error;
//! everything here concerns building the tables and the worker pool.

use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rule-table document could not be parsed
    #[error("failed to parse rule tables: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rule-table document parsed but failed validation
    #[error("invalid rule tables: {0}")]
    InvalidConfig(String),

    /// Rule-table file could not be read
    #[error("failed to read rule tables from {path}: {source}")]
    Io {
        /// The file that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Execution mode name not recognized
    #[error("unknown execution mode '{0}'")]
    UnknownMode(String),

    /// Dedicated thread pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = CoreError::InvalidConfig("empty pattern in vocabulary".to_string());
        assert_eq!(
            err.to_string(),
            "invalid rule tables: empty pattern in vocabulary"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(err.to_string().starts_with("failed to parse rule tables"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = CoreError::Io {
            path: "missing.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.toml"));
        assert!(msg.contains("no such file"));
    }
}
