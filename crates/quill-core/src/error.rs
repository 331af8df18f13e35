//! Error types for Quill Core

use crate::entity::EntityKind;
use thiserror::Error;

/// Result type alias using Quill's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Business-rule and integrity errors raised while creating or resolving records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Email taken: {0}")]
    EmailTaken(String),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Invalid post reference: {0} does not exist or is not published")]
    InvalidPostReference(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable machine-readable code for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmailTaken(_) => "EMAIL_TAKEN",
            Self::AuthorNotFound(_) => "AUTHOR_NOT_FOUND",
            Self::InvalidPostReference(_) => "INVALID_POST_REFERENCE",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<crate::limits::ValidationError> for Error {
    fn from(err: crate::limits::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmailTaken("a@b.c".into()).kind(), "EMAIL_TAKEN");
        assert_eq!(
            Error::InvalidPostReference("12".into()).kind(),
            "INVALID_POST_REFERENCE"
        );
        let duplicate = Error::DuplicateId {
            kind: EntityKind::Author,
            id: "9".into(),
        };
        assert_eq!(duplicate.to_string(), "Duplicate Author id: 9");
        assert_eq!(duplicate.kind(), "DUPLICATE_ID");
    }
}
