//! Identifiers, entity kinds and the tagged record type shared by all collections

use crate::annotation::Annotation;
use crate::author::Author;
use crate::content::Content;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for any record
///
/// Generated ids are ULIDs rendered as strings; ids loaded from seed data
/// may be arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Generate a fresh identifier, independent of collection size
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The three collections held by a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Author,
    Content,
    Annotation,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Author, Self::Content, Self::Annotation];

    /// Schema type name for this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Content => "Content",
            Self::Annotation => "Annotation",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A record of any kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Record {
    Author(Author),
    Content(Content),
    Annotation(Annotation),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Author(_) => EntityKind::Author,
            Self::Content(_) => EntityKind::Content,
            Self::Annotation(_) => EntityKind::Annotation,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Self::Author(a) => &a.id,
            Self::Content(c) => &c.id,
            Self::Annotation(n) => &n.id,
        }
    }

    /// Look up a scalar field by its schema name
    ///
    /// Returns `None` when the record has no scalar of that name. An optional
    /// scalar that is unset comes back as `Some(Value::Null)`.
    pub fn scalar(&self, field: &str) -> Option<serde_json::Value> {
        use serde_json::Value;

        match self {
            Self::Author(a) => match field {
                "id" => Some(Value::from(a.id.as_str())),
                "name" => Some(Value::from(a.name.as_str())),
                "email" => Some(Value::from(a.email.as_str())),
                "age" => Some(a.age.map(Value::from).unwrap_or(Value::Null)),
                _ => None,
            },
            Self::Content(c) => match field {
                "id" => Some(Value::from(c.id.as_str())),
                "title" => Some(Value::from(c.title.as_str())),
                "body" => Some(Value::from(c.body.as_str())),
                "published" => Some(Value::from(c.published)),
                _ => None,
            },
            Self::Annotation(n) => match field {
                "id" => Some(Value::from(n.id.as_str())),
                "text" => Some(Value::from(n.text.as_str())),
                _ => None,
            },
        }
    }

    /// Names of every scalar field exposed by this kind, in schema order
    pub fn scalar_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Author(_) => &["id", "name", "email", "age"],
            Self::Content(_) => &["id", "title", "body", "published"],
            Self::Annotation(_) => &["id", "text"],
        }
    }

    pub fn as_author(&self) -> Option<&Author> {
        match self {
            Self::Author(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_content(&self) -> Option<&Content> {
        match self {
            Self::Content(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Self::Annotation(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Author> for Record {
    fn from(a: Author) -> Self {
        Self::Author(a)
    }
}

impl From<Content> for Record {
    fn from(c: Content) -> Self {
        Self::Content(c)
    }
}

impl From<Annotation> for Record {
    fn from(n: Annotation) -> Self {
        Self::Annotation(n)
    }
}
