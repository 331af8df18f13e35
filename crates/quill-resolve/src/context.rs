//! Per-request resolver context

use std::sync::Arc;

use quill_storage::EntityStore;

/// Handed to every resolver; carries the store instead of a global
pub struct Context<S: EntityStore> {
    store: Arc<S>,
}

impl<S: EntityStore> Context<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: EntityStore> Clone for Context<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
