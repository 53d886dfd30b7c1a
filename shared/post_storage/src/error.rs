//! Error types for post storage operations

use thiserror::Error;

/// Result type for post storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during post storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing store failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The post list could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
