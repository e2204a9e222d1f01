//! Error types for Orrery
//!
//! Uses `thiserror` for ergonomic error handling with automatic `Display`
//! and `Error` trait implementations.
//!
//! Note the deliberate asymmetry in the design: provider failures (network,
//! auth, malformed responses) surface as `Err` and terminate the current turn,
//! while tool failures never do — they are converted to observation text and
//! fed back into the conversation so the model can self-correct.

use thiserror::Error;

/// The primary error type for Orrery operations.
#[derive(Error, Debug)]
pub enum OrreryError {
    /// Configuration-related errors (missing API key, invalid config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider errors (API failures, auth errors, malformed responses, etc.)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for Orrery operations.
pub type Result<T> = std::result::Result<T, OrreryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrreryError::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OrreryError = io_err.into();
        assert!(matches!(err, OrreryError::Io(_)));
    }

    #[test]
    fn test_provider_error_display() {
        let err = OrreryError::Provider("OpenAI API error (401): invalid key".to_string());
        assert!(err.to_string().starts_with("Provider error:"));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
