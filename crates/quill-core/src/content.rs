//! Content records (posts)

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// A post written by an author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: EntityId,
    pub title: String,
    /// May be empty
    pub body: String,
    pub published: bool,
    /// Owning author
    pub author_id: EntityId,
}

impl Content {
    pub fn new(id: EntityId, input: NewContent) -> Self {
        Self {
            id,
            title: input.title,
            body: input.body,
            published: input.published,
            author_id: input.author_id,
        }
    }
}

/// Data for creating a new content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author_id: EntityId,
}

impl NewContent {
    pub fn new(title: impl Into<String>, author_id: impl Into<EntityId>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            published: false,
            author_id: author_id.into(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_defaults() {
        let input = NewContent::new("Programming Music", "2");
        assert!(input.body.is_empty());
        assert!(!input.published);

        let content = Content::new(EntityId::new("12"), input.published(true));
        assert!(content.published);
        assert_eq!(content.author_id, "2");
    }

    #[test]
    fn test_content_serializes_camel_case() {
        let content = Content::new(
            EntityId::new("10"),
            NewContent::new("GraphQL 101", "1").with_body("This is how..."),
        );
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["authorId"], "1");
        assert!(json.get("author_id").is_none());
    }
}
