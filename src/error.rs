//! Error types for the spellcorrect library.
//!
//! The correction core itself never fails: lookups return `Option` and empty
//! searches return empty collections. Errors only arise at the edges, when
//! reading a corpus or a configuration file, or when a caller hands the
//! boundary an edit budget or suggestion count it cannot accept.
//!
//! # Examples
//!
//! ```
//! use spellcorrect::error::{SpellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellError::invalid_argument("max_edits must not be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellcorrect operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (corpus files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller-supplied limits that violate the query contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corpus ingestion errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellError::Config(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SpellError::Corpus(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellError::invalid_argument("max_edits must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid argument: max_edits must not be negative"
        );

        let error = SpellError::config("threads must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: threads must be positive"
        );

        let error = SpellError::corpus("empty corpus");
        assert_eq!(error.to_string(), "Corpus error: empty corpus");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let spell_error = SpellError::from(io_error);

        match spell_error {
            SpellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let spell_error: SpellError = json_error.into();
        assert!(matches!(spell_error, SpellError::Json(_)));
    }
}
