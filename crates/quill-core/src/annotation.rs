//! Annotation records (comments on published content)

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// A comment left by an author on a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: EntityId,
    pub text: String,
    pub author_id: EntityId,
    /// The content item this annotation belongs to; published when created
    pub content_id: EntityId,
}

impl Annotation {
    pub fn new(id: EntityId, input: NewAnnotation) -> Self {
        Self {
            id,
            text: input.text,
            author_id: input.author_id,
            content_id: input.content_id,
        }
    }
}

/// Data for creating a new annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnotation {
    pub text: String,
    pub author_id: EntityId,
    pub content_id: EntityId,
}

impl NewAnnotation {
    pub fn new(
        text: impl Into<String>,
        author_id: impl Into<EntityId>,
        content_id: impl Into<EntityId>,
    ) -> Self {
        Self {
            text: text.into(),
            author_id: author_id.into(),
            content_id: content_id.into(),
        }
    }
}
