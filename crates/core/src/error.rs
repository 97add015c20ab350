//! Error types for the sticker engine
//!
//! Engine internals (bucketing, scoring, ranking) never fail. Every variant
//! here originates at an I/O boundary: manifest fetch, image fetch, clipboard
//! write, recency persistence or config files.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for sticker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the sticker engine
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest fetch or parse failed; the live index is left untouched
    #[error("Failed to load manifest '{location}': {reason}")]
    LoadFailure {
        /// Manifest path or URL that failed
        location: String,
        /// Underlying cause
        reason: String,
    },

    /// Image fetch or clipboard write failed; recency is left untouched
    #[error("Failed to copy sticker '{file_id}': {reason}")]
    CopyFailure {
        /// Sticker that could not be copied
        file_id: String,
        /// Underlying cause
        reason: String,
    },

    /// Key-value persistence write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build a `LoadFailure` for a manifest location.
    pub fn load_failure(location: impl Into<String>, reason: impl ToString) -> Self {
        Error::LoadFailure {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a `CopyFailure` for a sticker.
    pub fn copy_failure(file_id: impl Into<String>, reason: impl ToString) -> Self {
        Error::CopyFailure {
            file_id: file_id.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
