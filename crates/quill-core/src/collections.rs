//! The three append-only record collections

use std::collections::HashMap;

use crate::annotation::Annotation;
use crate::author::Author;
use crate::content::Content;
use crate::entity::{EntityId, EntityKind, Record};
use crate::error::{Error, Result};

/// Authors, content items and annotations in insertion order
///
/// Each collection carries an id → position index kept in step with `add`.
/// Nothing is ever updated or removed.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    authors: Vec<Author>,
    contents: Vec<Content>,
    annotations: Vec<Annotation>,
    author_index: HashMap<EntityId, usize>,
    content_index: HashMap<EntityId, usize>,
    annotation_index: HashMap<EntityId, usize>,
}

/// Per-kind collection sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct StoreCounts {
    pub authors: usize,
    pub contents: usize,
    pub annotations: usize,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully constructed record to the collection for its kind
    ///
    /// Fails only when the id is already present in that collection.
    pub fn add(&mut self, record: Record) -> Result<Record> {
        let kind = record.kind();
        if self.contains(kind, record.id()) {
            return Err(Error::DuplicateId {
                kind,
                id: record.id().to_string(),
            });
        }

        match &record {
            Record::Author(a) => {
                self.author_index.insert(a.id.clone(), self.authors.len());
                self.authors.push(a.clone());
            }
            Record::Content(c) => {
                self.content_index.insert(c.id.clone(), self.contents.len());
                self.contents.push(c.clone());
            }
            Record::Annotation(n) => {
                self.annotation_index
                    .insert(n.id.clone(), self.annotations.len());
                self.annotations.push(n.clone());
            }
        }

        tracing::trace!("Added {} {}", kind, record.id());
        Ok(record)
    }

    pub fn contains(&self, kind: EntityKind, id: &EntityId) -> bool {
        match kind {
            EntityKind::Author => self.author_index.contains_key(id),
            EntityKind::Content => self.content_index.contains_key(id),
            EntityKind::Annotation => self.annotation_index.contains_key(id),
        }
    }

    /// Every record of `kind`, in insertion order
    pub fn all(&self, kind: EntityKind) -> Vec<Record> {
        match kind {
            EntityKind::Author => self.authors.iter().cloned().map(Record::from).collect(),
            EntityKind::Content => self.contents.iter().cloned().map(Record::from).collect(),
            EntityKind::Annotation => self
                .annotations
                .iter()
                .cloned()
                .map(Record::from)
                .collect(),
        }
    }

    pub fn find_by_id(&self, kind: EntityKind, id: &EntityId) -> Option<Record> {
        match kind {
            EntityKind::Author => self.author(id).cloned().map(Record::from),
            EntityKind::Content => self.content(id).cloned().map(Record::from),
            EntityKind::Annotation => self.annotation(id).cloned().map(Record::from),
        }
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn author(&self, id: &EntityId) -> Option<&Author> {
        self.author_index.get(id).map(|&i| &self.authors[i])
    }

    pub fn content(&self, id: &EntityId) -> Option<&Content> {
        self.content_index.get(id).map(|&i| &self.contents[i])
    }

    pub fn annotation(&self, id: &EntityId) -> Option<&Annotation> {
        self.annotation_index.get(id).map(|&i| &self.annotations[i])
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            authors: self.authors.len(),
            contents: self.contents.len(),
            annotations: self.annotations.len(),
        }
    }
}
