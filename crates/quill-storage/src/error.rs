//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    Lock(String),

    #[error(transparent)]
    Record(#[from] quill_core::Error),
}

impl StorageError {
    /// Stable machine-readable code for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lock(_) => "STORAGE",
            Self::Record(e) => e.kind(),
        }
    }
}
