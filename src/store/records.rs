use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::db::Backend;
use crate::errors::StoreError;
use crate::store::Collection;

/// A flat record stored in a keyed collection. Ids are unique within the
/// collection and assigned by the store on create.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// In-memory collection backed by one persisted JSON document.
///
/// Every write persists the candidate state first and commits to memory
/// only on success, so a failed persistence call leaves the previous
/// state visible. The write lock is held across persist-and-commit; two
/// writes to the same collection never interleave.
pub struct RecordStore<T: Record> {
    backend: Arc<dyn Backend>,
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordStore<T> {
    pub async fn open(backend: Arc<dyn Backend>) -> Result<Self, StoreError> {
        let key = T::COLLECTION.to_string();
        let records = match backend.get(&key).await {
            Ok(Some(value)) => serde_json::from_value(value)
                .map_err(|source| StoreError::Corrupt { key, source })?,
            Ok(None) => Vec::new(),
            Err(source) => return Err(StoreError::Persistence { key, source }),
        };
        Ok(Self {
            backend,
            records: RwLock::new(records),
        })
    }

    /// All records, in insertion order. An absent collection is empty.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Assigns id = max existing id + 1 and appends.
    pub async fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.set_id(next_id);

        let mut next = records.clone();
        next.push(record.clone());
        self.persist(&next).await?;
        *records = next;
        Ok(record)
    }

    /// Whole-record replacement of the record with `id`.
    pub async fn update(&self, id: u64, mut record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let pos = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: T::COLLECTION.to_string(),
                id,
            })?;
        record.set_id(id);

        let mut next = records.clone();
        next[pos] = record.clone();
        self.persist(&next).await?;
        *records = next;
        Ok(record)
    }

    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let pos = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: T::COLLECTION.to_string(),
                id,
            })?;

        let mut next = records.clone();
        next.remove(pos);
        self.persist(&next).await?;
        *records = next;
        Ok(())
    }

    async fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let key = T::COLLECTION.to_string();
        let value = serde_json::to_value(records)
            .map_err(|source| StoreError::Corrupt { key: key.clone(), source })?;
        self.backend
            .set(&key, &value)
            .await
            .map_err(|source| StoreError::Persistence { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryBackend;
    use crate::model::income::Income;
    use chrono::NaiveDate;

    fn income(amount: f64, description: &str, date: &str) -> Income {
        Income {
            id: 0,
            amount,
            description: description.to_string(),
            category: "daily".to_string(),
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    async fn store_with(backend: Arc<MemoryBackend>) -> RecordStore<Income> {
        RecordStore::open(backend as Arc<dyn Backend>).await.unwrap()
    }

    #[tokio::test]
    async fn create_assigns_incrementing_ids_from_one() {
        let store = store_with(Arc::new(MemoryBackend::new())).await;

        let first = store
            .create(income(100.0, "x", "2025-06-01"))
            .await
            .unwrap();
        let second = store
            .create(income(50.0, "y", "2025-06-02"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let ids: Vec<u64> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn ids_stay_unique_after_deleting_the_max() {
        let store = store_with(Arc::new(MemoryBackend::new())).await;
        store.create(income(1.0, "a", "2025-06-01")).await.unwrap();
        let b = store.create(income(2.0, "b", "2025-06-02")).await.unwrap();
        store.delete(b.id).await.unwrap();

        let c = store.create(income(3.0, "c", "2025-06-03")).await.unwrap();
        assert_eq!(c.id, 2);
        let ids: Vec<u64> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn update_replaces_exactly_one_record() {
        let store = store_with(Arc::new(MemoryBackend::new())).await;
        let a = store.create(income(10.0, "a", "2025-06-01")).await.unwrap();
        let b = store.create(income(20.0, "b", "2025-06-02")).await.unwrap();

        let updated = store
            .update(a.id, income(99.0, "a2", "2025-06-09"))
            .await
            .unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.amount, 99.0);

        let all = store.list().await;
        assert_eq!(all[0], updated);
        assert_eq!(all[1], b);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_leaves_state() {
        let store = store_with(Arc::new(MemoryBackend::new())).await;
        let a = store.create(income(10.0, "a", "2025-06-01")).await.unwrap();

        let err = store
            .update(99, income(1.0, "z", "2025-06-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 99, .. }));
        assert_eq!(store.list().await, vec![a]);
    }

    #[tokio::test]
    async fn delete_preserves_order_of_the_rest() {
        let store = store_with(Arc::new(MemoryBackend::new())).await;
        let a = store.create(income(1.0, "a", "2025-06-01")).await.unwrap();
        let b = store.create(income(2.0, "b", "2025-06-02")).await.unwrap();
        let c = store.create(income(3.0, "c", "2025-06-03")).await.unwrap();

        store.delete(b.id).await.unwrap();
        assert_eq!(store.list().await, vec![a, c]);

        let err = store.delete(b.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn failed_persistence_rejects_the_whole_operation() {
        let backend = Arc::new(MemoryBackend::new());
        let store = store_with(backend.clone()).await;
        let a = store.create(income(10.0, "a", "2025-06-01")).await.unwrap();

        backend.set_fail_writes(true);
        assert!(matches!(
            store.create(income(20.0, "b", "2025-06-02")).await,
            Err(StoreError::Persistence { .. })
        ));
        assert!(matches!(
            store.delete(a.id).await,
            Err(StoreError::Persistence { .. })
        ));
        assert_eq!(store.list().await, vec![a.clone()]);

        // and the persisted document still holds only the first record
        backend.set_fail_writes(false);
        let reopened = store_with(backend).await;
        assert_eq!(reopened.list().await, vec![a]);
    }

    #[tokio::test]
    async fn records_survive_a_reopen() {
        let backend = Arc::new(MemoryBackend::new());
        let store = store_with(backend.clone()).await;
        let a = store.create(income(10.0, "a", "2025-06-01")).await.unwrap();

        let reopened = store_with(backend).await;
        assert_eq!(reopened.list().await, vec![a.clone()]);

        // ids keep counting from the persisted max
        let b = reopened
            .create(income(20.0, "b", "2025-06-02"))
            .await
            .unwrap();
        assert_eq!(b.id, a.id + 1);
    }
}
