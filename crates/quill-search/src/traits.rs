//! Searchable record trait

use quill_core::{Annotation, Author, Content, Record};

/// Records that expose text fields to the free-text filter
///
/// A record matches when any of its fields matches.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Author {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Content {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

impl Searchable for Annotation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str()]
    }
}

impl Searchable for Record {
    fn search_fields(&self) -> Vec<&str> {
        match self {
            Record::Author(a) => a.search_fields(),
            Record::Content(c) => c.search_fields(),
            Record::Annotation(n) => n.search_fields(),
        }
    }
}
