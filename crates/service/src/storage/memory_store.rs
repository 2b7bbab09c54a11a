use std::sync::Arc;

use async_trait::async_trait;
use models::Record;
use tokio::sync::RwLock;

use crate::storage::resource_store::{Replace, ResourceStore};
use crate::storage::StoreError;

/// Ordered in-memory record collection guarded by a reader/writer lock.
///
/// Reads (`list`, `get`, `exists`) share the lock; every mutation takes it
/// exclusively, so each call observes and leaves a consistent collection.
/// Cloning yields another handle onto the same records.
#[derive(Clone)]
pub struct MemoryStore<R> {
    inner: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn duplicate<R: Record>(record: &R) -> StoreError {
    StoreError::DuplicateId { kind: R::KIND, id: record.id().to_string() }
}

#[async_trait]
impl<R: Record> ResourceStore<R> for MemoryStore<R> {
    async fn list(&self) -> Vec<R> {
        self.inner.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<R> {
        let items = self.inner.read().await;
        items.iter().find(|r| r.id() == id).cloned()
    }

    async fn add(&self, record: R) -> Result<(), StoreError> {
        let mut items = self.inner.write().await;
        if items.iter().any(|r| r.id() == record.id()) {
            return Err(duplicate(&record));
        }
        items.push(record);
        Ok(())
    }

    async fn replace(&self, id: String, build: Replace<R>) -> R {
        let mut items = self.inner.write().await;
        let previous = items.iter().position(|r| r.id() == id).map(|i| items.remove(i));
        let record = build(previous.as_ref());
        items.retain(|r| r.id() != id && r.id() != record.id());
        items.push(record.clone());
        record
    }

    async fn remove(&self, id: &str) -> usize {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|r| r.id() != id);
        before - items.len()
    }

    async fn exists(&self, id: &str) -> bool {
        let items = self.inner.read().await;
        items.iter().any(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use models::Entity;

    fn entity(id: &str, name: &str, qty: i32) -> Entity {
        Entity {
            id: id.into(),
            name: name.into(),
            created_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            available_quantity: qty,
        }
    }

    #[tokio::test]
    async fn memory_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        assert!(store.is_empty().await);

        store.add(entity("a", "bolt", 1)).await?;
        store.add(entity("b", "nut", 2)).await?;
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("a").await, Some(entity("a", "bolt", 1)));
        assert!(store.exists("b").await);
        assert!(!store.exists("c").await);

        assert_eq!(store.remove("a").await, 1);
        assert_eq!(store.get("a").await, None);
        assert_eq!(store.remove("a").await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        for id in ["z", "a", "m"] {
            store.add(entity(id, id, 0)).await?;
        }
        let ids: Vec<String> = store.list().await.into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["z", "a", "m"]);
        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_duplicate_id() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        store.add(entity("a", "bolt", 1)).await?;
        let err = store.add(entity("a", "other", 9)).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { kind: "entity", id: "a".into() });
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a").await.map(|e| e.name), Some("bolt".into()));
        Ok(())
    }

    #[tokio::test]
    async fn add_or_update_replaces_and_moves_to_end() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        store.add(entity("a", "bolt", 1)).await?;
        store.add(entity("b", "nut", 2)).await?;

        store.add_or_update(entity("a", "bolt v2", 5)).await;
        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "b");
        assert_eq!(all[1], entity("a", "bolt v2", 5));

        store.add_or_update(entity("c", "washer", 0)).await;
        assert_eq!(store.len().await, 3);
        Ok(())
    }

    #[tokio::test]
    async fn replace_sees_previous_record() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        store.add(entity("a", "bolt", 1)).await?;

        let updated = store
            .replace(
                "a".into(),
                Box::new(|prev: Option<&Entity>| {
                    let qty = prev.map(|p| p.available_quantity).unwrap_or_default();
                    entity("a", "bolt", qty + 10)
                }),
            )
            .await;
        assert_eq!(updated.available_quantity, 11);
        assert_eq!(store.get("a").await, Some(updated));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_do_not_lose_records() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Entity>::new();
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.add(entity(&format!("id-{i}"), "item", i)).await
            }));
        }
        for h in handles {
            h.await??;
        }
        assert_eq!(store.len().await, 64);
        Ok(())
    }
}
