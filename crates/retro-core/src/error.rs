//! Error types for Retro core operations.
//!
//! The persistence model deliberately exposes a single broad storage
//! error class: open failure, query failure, and transaction failure
//! are not distinguished. The HTTP layer maps these to a generic 500
//! response and logs the detail.

use thiserror::Error;

/// Result type alias for Retro operations.
pub type Result<T> = std::result::Result<T, RetroError>;

/// Core error type for Retro operations.
#[derive(Debug, Error)]
pub enum RetroError {
    /// Storage backend error (open, query, or transaction failure)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for RetroError {
    fn from(err: rusqlite::Error) -> Self {
        RetroError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<std::io::Error> for RetroError {
    fn from(err: std::io::Error) -> Self {
        RetroError::Storage(err.to_string())
    }
}
