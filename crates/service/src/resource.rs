use std::sync::Arc;

use chrono::Utc;
use models::validation::{validate_create, validate_update};
use models::{CreateRequest, Record, UpdateRequest};
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::ids::new_id;
use crate::storage::memory_store::MemoryStore;
use crate::storage::resource_store::ResourceStore;

/// Validate → mutate pipeline for one resource family.
///
/// Each call re-reads the store; nothing is cached between calls.
pub struct ResourceService<R: Record> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: Record> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<R: Record> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    /// Service over a fresh, empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::<R>::new()))
    }

    pub async fn list(&self) -> Vec<R> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::missing_id(R::KIND, id))
    }

    /// Create a record with a server-assigned id and creation time.
    pub async fn create<C>(&self, req: Option<C>) -> Result<R, ServiceError>
    where
        C: CreateRequest<Record = R>,
    {
        let req = validate_create(req)?;
        let record = req.into_record(new_id(), Utc::now());
        self.store.add(record.clone()).await?;
        info!(kind = R::KIND, id = record.id(), "created");
        Ok(record)
    }

    /// Insert or replace the record named by `path_id`. A replaced record
    /// keeps its original creation time.
    pub async fn upsert<U>(&self, path_id: &str, req: Option<U>) -> Result<R, ServiceError>
    where
        U: UpdateRequest<Record = R>,
    {
        let req = validate_update(path_id, req)?;
        let now = Utc::now();
        let record = self
            .store
            .replace(
                path_id.to_string(),
                Box::new(move |prev: Option<&R>| {
                    req.into_record(prev.map(|p| p.created_at()).unwrap_or(now))
                }),
            )
            .await;
        info!(kind = R::KIND, id = record.id(), "upserted");
        Ok(record)
    }

    /// Remove every record with `id`; at least one must exist.
    pub async fn delete(&self, id: &str) -> Result<usize, ServiceError> {
        let removed = self.store.remove(id).await;
        if removed < 1 {
            debug!(kind = R::KIND, id, "delete miss");
            return Err(ServiceError::missing_with_id(R::KIND, id));
        }
        info!(kind = R::KIND, id, removed, "deleted");
        Ok(removed)
    }

    pub async fn exists(&self, id: &str) -> Result<(), ServiceError> {
        if self.store.exists(id).await {
            Ok(())
        } else {
            Err(ServiceError::missing_with_id(R::KIND, id))
        }
    }
}
