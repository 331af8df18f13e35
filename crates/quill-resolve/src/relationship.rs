//! Foreign-key lookups between records
//!
//! One-to-many lookups scan the owning collection in insertion order and
//! never fail. One-to-one lookups return `None` for a dangling reference.

use quill_core::{Annotation, Author, Collections, Content};

pub fn author_of_content<'a>(collections: &'a Collections, content: &Content) -> Option<&'a Author> {
    collections.author(&content.author_id)
}

pub fn annotations_of_content<'a>(
    collections: &'a Collections,
    content: &Content,
) -> Vec<&'a Annotation> {
    collections
        .annotations()
        .iter()
        .filter(|n| n.content_id == content.id)
        .collect()
}

pub fn contents_of_author<'a>(collections: &'a Collections, author: &Author) -> Vec<&'a Content> {
    collections
        .contents()
        .iter()
        .filter(|c| c.author_id == author.id)
        .collect()
}

pub fn annotations_of_author<'a>(
    collections: &'a Collections,
    author: &Author,
) -> Vec<&'a Annotation> {
    collections
        .annotations()
        .iter()
        .filter(|n| n.author_id == author.id)
        .collect()
}

pub fn author_of_annotation<'a>(
    collections: &'a Collections,
    annotation: &Annotation,
) -> Option<&'a Author> {
    collections.author(&annotation.author_id)
}

pub fn content_of_annotation<'a>(
    collections: &'a Collections,
    annotation: &Annotation,
) -> Option<&'a Content> {
    collections.content(&annotation.content_id)
}
