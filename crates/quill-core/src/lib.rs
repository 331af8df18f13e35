//! Quill Core - Record types for the resolution engine
//!
//! This crate provides the author, content and annotation records, the
//! append-only collections that hold them, and the error types shared by
//! the rest of the workspace.

pub mod annotation;
pub mod author;
pub mod collections;
pub mod content;
pub mod entity;
pub mod error;
pub mod limits;

pub use annotation::{Annotation, NewAnnotation};
pub use author::{Author, NewAuthor};
pub use collections::{Collections, StoreCounts};
pub use content::{Content, NewContent};
pub use entity::{EntityId, EntityKind, Record};
pub use error::{Error, Result};
pub use limits::ValidationError;
