//! Error types for the announcement store.

use thiserror::Error;

/// Main error type for store operations.
///
/// Every variant is a storage failure. "No announcement with that id" is a
/// normal `Ok(None)` result, never an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage is locked by another process")]
    Locked,

    #[error("Invalid slot key: {0}")]
    InvalidSlotKey(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
