//! Quill Storage - Entity store backends
//!
//! The store owns the author, content and annotation collections
//! exclusively and hands out clones or closure-scoped borrows.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use seed::demo_collections;
pub use traits::EntityStore;
