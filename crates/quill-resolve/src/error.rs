//! Resolution error types

use quill_storage::StorageError;
use thiserror::Error;

/// Result type alias for resolver operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Errors surfaced as field-level errors in a response
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Record(#[from] quill_core::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Unknown field: {type_name}.{field}")]
    UnknownField { type_name: String, field: String },

    #[error("Invalid arguments for {field}: {message}")]
    InvalidArguments { field: String, message: String },
}

impl ResolveError {
    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn invalid_arguments(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(e) => e.kind(),
            Self::Storage(e) => e.kind(),
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::InvalidArguments { .. } => "INVALID_ARGUMENTS",
        }
    }
}

impl From<quill_core::ValidationError> for ResolveError {
    fn from(err: quill_core::ValidationError) -> Self {
        Self::Record(err.into())
    }
}
