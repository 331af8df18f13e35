//! Author records

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// A person who writes content and annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Contact email, unique across all authors
    pub email: String,

    /// Age in years, if known
    pub age: Option<i32>,
}

impl Author {
    /// Build an author from validated input and a freshly generated id
    pub fn new(id: EntityId, input: NewAuthor) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

/// Data for creating a new author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_from_input() {
        let input = NewAuthor::new("Andrew", "andrew@example.com").with_age(27);
        let author = Author::new(EntityId::new("1"), input);

        assert_eq!(author.name, "Andrew");
        assert_eq!(author.email, "andrew@example.com");
        assert_eq!(author.age, Some(27));
    }

    #[test]
    fn test_new_author_age_is_optional() {
        let input: NewAuthor =
            serde_json::from_value(serde_json::json!({"name": "Mike", "email": "mike@example.com"}))
                .unwrap();
        assert!(input.age.is_none());
    }
}
