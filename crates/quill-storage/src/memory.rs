//! In-memory entity store

use crate::error::{StorageError, StorageResult};
use crate::seed::demo_collections;
use crate::traits::EntityStore;
use quill_core::Collections;
use std::sync::RwLock;

/// In-memory entity store
///
/// State lives for the lifetime of the value and is lost on drop. Every
/// instance is independent, so tests can build as many as they like.
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::from_collections(Collections::new())
    }

    /// Store pre-populated with the demo authors, posts and comments
    pub fn seeded() -> Self {
        Self::from_collections(demo_collections())
    }

    pub fn from_collections(collections: Collections) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for MemoryStore {
    fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> StorageResult<R> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(f(&*collections))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Collections) -> R) -> StorageResult<R> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(f(&mut *collections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Author, EntityId, EntityKind, NewAuthor, Record};
    use std::sync::Arc;
    use std::thread;

    fn author(name: &str) -> Record {
        Author::new(
            EntityId::generate(),
            NewAuthor::new(name, format!("{}@example.com", name)),
        )
        .into()
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();

        let added = store.add(author("andrew")).unwrap();
        let found = store.find_by_id(EntityKind::Author, added.id()).unwrap();
        assert_eq!(found, Some(added));

        assert_eq!(store.all(EntityKind::Author).unwrap().len(), 1);
        assert!(store.all(EntityKind::Annotation).unwrap().is_empty());
    }

    #[test]
    fn test_instances_are_independent() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.add(author("andrew")).unwrap();

        assert_eq!(a.counts().unwrap().authors, 1);
        assert_eq!(b.counts().unwrap().authors, 0);
    }

    #[test]
    fn test_duplicate_id_is_storage_error() {
        let store = MemoryStore::new();
        let record = author("andrew");
        store.add(record.clone()).unwrap();

        let err = store.add(record).unwrap_err();
        assert_eq!(err.kind(), "DUPLICATE_ID");
    }

    #[test]
    fn test_concurrent_adds() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.add(author(&format!("writer{}-{}", t, i))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.counts().unwrap().authors, 400);
    }
}
