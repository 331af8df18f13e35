//! Referential and uniqueness checks run before a create is committed
//!
//! Each check reads the collections it is given; callers run it inside the
//! same `write` lock as the following `add` so nothing can slip in between.

use quill_core::{limits, Collections, Error, NewAnnotation, NewAuthor, NewContent, Result};

/// No existing author may already use the email
pub fn validate_create_author(collections: &Collections, input: &NewAuthor) -> Result<()> {
    limits::validate_name(&input.name)?;
    limits::validate_email(&input.email)?;

    if collections.authors().iter().any(|a| a.email == input.email) {
        return Err(Error::EmailTaken(input.email.clone()));
    }
    Ok(())
}

/// The owning author must exist
pub fn validate_create_content(collections: &Collections, input: &NewContent) -> Result<()> {
    limits::validate_title(&input.title)?;
    limits::validate_body(&input.body)?;

    if collections.author(&input.author_id).is_none() {
        return Err(Error::AuthorNotFound(input.author_id.to_string()));
    }
    Ok(())
}

/// The author must exist and the content item must exist and be published
///
/// The author is checked first, so a request with both references broken
/// reports `AuthorNotFound`.
pub fn validate_create_annotation(collections: &Collections, input: &NewAnnotation) -> Result<()> {
    limits::validate_annotation_text(&input.text)?;

    if collections.author(&input.author_id).is_none() {
        return Err(Error::AuthorNotFound(input.author_id.to_string()));
    }

    match collections.content(&input.content_id) {
        Some(content) if content.published => Ok(()),
        _ => Err(Error::InvalidPostReference(input.content_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Author, Content, EntityId};

    fn collections() -> Collections {
        let mut c = Collections::new();
        c.add(Author::new(EntityId::new("1"), NewAuthor::new("Andrew", "andrew@example.com")).into())
            .unwrap();
        c.add(
            Content::new(EntityId::new("10"), NewContent::new("GraphQL 101", "1").published(true))
                .into(),
        )
        .unwrap();
        c.add(Content::new(EntityId::new("11"), NewContent::new("GraphQL 201", "1")).into())
            .unwrap();
        c
    }

    #[test]
    fn test_email_taken() {
        let c = collections();
        let err = validate_create_author(&c, &NewAuthor::new("Drew", "andrew@example.com"))
            .unwrap_err();
        assert_eq!(err, Error::EmailTaken("andrew@example.com".into()));
        assert!(validate_create_author(&c, &NewAuthor::new("Drew", "drew@example.com")).is_ok());
    }

    #[test]
    fn test_content_requires_author() {
        let c = collections();
        assert!(validate_create_content(&c, &NewContent::new("Hi", "1")).is_ok());
        assert_eq!(
            validate_create_content(&c, &NewContent::new("Hi", "99")).unwrap_err(),
            Error::AuthorNotFound("99".into())
        );
    }

    #[test]
    fn test_annotation_references() {
        let c = collections();
        assert!(validate_create_annotation(&c, &NewAnnotation::new("Nice", "1", "10")).is_ok());

        // unpublished
        assert_eq!(
            validate_create_annotation(&c, &NewAnnotation::new("Nice", "1", "11")).unwrap_err(),
            Error::InvalidPostReference("11".into())
        );
        assert_eq!(
            validate_create_annotation(&c, &NewAnnotation::new("Nice", "1", "404")).unwrap_err(),
            Error::InvalidPostReference("404".into())
        );
        assert_eq!(
            validate_create_annotation(&c, &NewAnnotation::new("Nice", "7", "404")).unwrap_err(),
            Error::AuthorNotFound("7".into())
        );
    }

    #[test]
    fn test_length_limits() {
        let c = collections();
        let long = "x".repeat(limits::MAX_TITLE_LEN + 1);
        let err = validate_create_content(&c, &NewContent::new(long, "1")).unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
    }
}
