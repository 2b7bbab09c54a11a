use async_trait::async_trait;
use models::Record;

use crate::storage::StoreError;

/// Builds the record to store from the one it replaces, if any.
pub type Replace<R> = Box<dyn FnOnce(Option<&R>) -> R + Send>;

/// Trait abstraction over one resource family's record collection.
/// Implementations must make each call atomic with respect to the others.
#[async_trait]
pub trait ResourceStore<R: Record>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<R>;

    async fn get(&self, id: &str) -> Option<R>;

    /// Append `record`; fails if its id is already present.
    async fn add(&self, record: R) -> Result<(), StoreError>;

    /// Drop every record with the same id, then append `record`.
    async fn add_or_update(&self, record: R) -> R {
        self.replace(record.id().to_string(), Box::new(move |_: Option<&R>| record)).await
    }

    /// Like `add_or_update`, but the new record is built while the
    /// collection is locked, from the first record it replaces.
    async fn replace(&self, id: String, build: Replace<R>) -> R;

    /// Remove every record with `id`; returns how many were removed.
    async fn remove(&self, id: &str) -> usize;

    async fn exists(&self, id: &str) -> bool;
}
