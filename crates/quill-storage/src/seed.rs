//! Demo dataset loaded by `MemoryStore::seeded`

use quill_core::{
    Annotation, Author, Collections, Content, EntityId, NewAnnotation, NewAuthor, NewContent,
    Record,
};

/// Three authors, three content items and four annotations
///
/// Every annotation points at a published content item, the same rule
/// `createAnnotation` enforces.
pub fn demo_collections() -> Collections {
    let authors = [
        Author::new(
            EntityId::new("1"),
            NewAuthor::new("Andrew", "andrew@example.com").with_age(27),
        ),
        Author::new(
            EntityId::new("2"),
            NewAuthor::new("Sarah", "sarah@example.com"),
        ),
        Author::new(EntityId::new("3"), NewAuthor::new("Mike", "mike@example.com")),
    ];

    let contents = [
        Content::new(
            EntityId::new("10"),
            NewContent::new("GraphQL 101", "1")
                .with_body("This is how to use GraphQL...")
                .published(true),
        ),
        Content::new(
            EntityId::new("11"),
            NewContent::new("GraphQL 201", "1").with_body("This is an advanced GraphQL post..."),
        ),
        Content::new(
            EntityId::new("12"),
            NewContent::new("Programming Music", "2").published(true),
        ),
    ];

    let annotations = [
        Annotation::new(
            EntityId::new("102"),
            NewAnnotation::new("This worked well for me. Thanks!", "2", "12"),
        ),
        Annotation::new(
            EntityId::new("103"),
            NewAnnotation::new("Glad you enjoyed it.", "3", "10"),
        ),
        Annotation::new(
            EntityId::new("104"),
            NewAnnotation::new("This did no work.", "1", "10"),
        ),
        Annotation::new(
            EntityId::new("105"),
            NewAnnotation::new("Nevermind. I got it to work.", "1", "12"),
        ),
    ];

    let mut collections = Collections::new();
    let records = authors
        .into_iter()
        .map(Record::from)
        .chain(contents.into_iter().map(Record::from))
        .chain(annotations.into_iter().map(Record::from));
    for record in records {
        // Seed ids are distinct literals
        if let Err(e) = collections.add(record) {
            tracing::error!("Failed to load demo record: {}", e);
        }
    }
    collections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_counts() {
        let counts = demo_collections().counts();
        assert_eq!(counts.authors, 3);
        assert_eq!(counts.contents, 3);
        assert_eq!(counts.annotations, 4);
    }

    #[test]
    fn test_demo_references_resolve() {
        let collections = demo_collections();
        for content in collections.contents() {
            assert!(collections.author(&content.author_id).is_some());
        }
        for annotation in collections.annotations() {
            assert!(collections.author(&annotation.author_id).is_some());
            let content = collections.content(&annotation.content_id).unwrap();
            assert!(content.published);
        }
    }
}
