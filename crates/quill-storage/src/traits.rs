//! Entity store trait definition

use crate::error::StorageResult;
use quill_core::{Collections, EntityId, EntityKind, Record, StoreCounts};

/// Trait for entity store implementations
///
/// `write` runs its closure under exclusive access, so a validation followed
/// by an `add` inside one `write` call cannot interleave with another writer.
pub trait EntityStore: Send + Sync {
    /// Run `f` with shared access to the collections
    fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> StorageResult<R>;

    /// Run `f` with exclusive access to the collections
    fn write<R>(&self, f: impl FnOnce(&mut Collections) -> R) -> StorageResult<R>;

    /// Produce a globally unique identifier
    fn generate_id(&self) -> EntityId {
        EntityId::generate()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a fully constructed record
    fn add(&self, record: Record) -> StorageResult<Record> {
        Ok(self.write(|c| c.add(record))??)
    }

    /// Every record of `kind`, in insertion order
    fn all(&self, kind: EntityKind) -> StorageResult<Vec<Record>> {
        self.read(|c| c.all(kind))
    }

    /// Look up a record by id
    fn find_by_id(&self, kind: EntityKind, id: &EntityId) -> StorageResult<Option<Record>> {
        self.read(|c| c.find_by_id(kind, id))
    }

    /// Collection sizes
    fn counts(&self) -> StorageResult<StoreCounts> {
        self.read(|c| c.counts())
    }
}
