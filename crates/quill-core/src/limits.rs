//! Input validation limits for resource protection

/// Maximum length for an author name (256 chars)
pub const MAX_NAME_LEN: usize = 256;

/// Maximum length for an email address (254 chars)
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length for a content title (512 chars)
pub const MAX_TITLE_LEN: usize = 512;

/// Maximum length for a content body (64KB)
pub const MAX_BODY_LEN: usize = 64 * 1024;

/// Maximum length for annotation text (16KB)
pub const MAX_ANNOTATION_LEN: usize = 16 * 1024;

/// Maximum length for a free-text filter argument (256 chars)
pub const MAX_QUERY_LEN: usize = 256;

/// Maximum nesting of field selections in one request (16)
pub const MAX_SELECTION_DEPTH: usize = 16;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    QueryTooLong { len: usize, max: usize },
    SelectionTooDeep { depth: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldTooLong { field, len, max } => {
                write!(f, "{} too long: {} chars (max {})", field, len, max)
            }
            Self::QueryTooLong { len, max } => {
                write!(f, "Query argument too long: {} chars (max {})", len, max)
            }
            Self::SelectionTooDeep { depth, max } => {
                write!(f, "Selection nested too deep: {} (max {})", depth, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::FieldTooLong { field, len, max });
    }
    Ok(())
}

/// Validate author name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_len("Name", name, MAX_NAME_LEN)
}

/// Validate author email
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    check_len("Email", email, MAX_EMAIL_LEN)
}

/// Validate content title
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_len("Title", title, MAX_TITLE_LEN)
}

/// Validate content body
pub fn validate_body(body: &str) -> Result<(), ValidationError> {
    check_len("Body", body, MAX_BODY_LEN)
}

/// Validate annotation text
pub fn validate_annotation_text(text: &str) -> Result<(), ValidationError> {
    check_len("Text", text, MAX_ANNOTATION_LEN)
}

/// Validate filter argument
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    let len = query.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(ValidationError::QueryTooLong {
            len,
            max: MAX_QUERY_LEN,
        });
    }
    Ok(())
}

/// Validate selection depth
pub fn validate_selection_depth(depth: usize) -> Result<(), ValidationError> {
    if depth > MAX_SELECTION_DEPTH {
        return Err(ValidationError::SelectionTooDeep {
            depth,
            max: MAX_SELECTION_DEPTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Andrew").is_ok());
        assert!(validate_name("").is_ok());
        assert!(validate_name(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_body_allows_empty() {
        assert!(validate_body("").is_ok());
        assert!(validate_body(&"x".repeat(100_000)).is_err());
    }

    #[test]
    fn test_validate_selection_depth() {
        assert!(validate_selection_depth(MAX_SELECTION_DEPTH).is_ok());
        let err = validate_selection_depth(MAX_SELECTION_DEPTH + 1).unwrap_err();
        assert_eq!(err.to_string(), "Selection nested too deep: 17 (max 16)");
    }
}
