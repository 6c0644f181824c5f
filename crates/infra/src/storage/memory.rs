//! Process-local `RecordStore` adapter
//!
//! Records live in a `BTreeMap` keyed by `(event_slug, id)` behind a
//! `parking_lot::RwLock`, so listing one event is a range scan.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use ziggy_core::{sort_records, RecordStore};
use ziggy_domain::{AdminRecord, Result, ZiggyError};

type Key = (String, String);

/// In-memory record store; clones share the same records
pub struct InMemoryRecordStore<T: AdminRecord> {
    records: Arc<RwLock<BTreeMap<Key, T>>>,
}

impl<T: AdminRecord> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self { records: Arc::new(RwLock::new(BTreeMap::new())) }
    }

    /// Store seeded with `records`; later duplicates replace earlier ones
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records.into_iter().map(|record| (key_of(&record), record)).collect();
        Self { records: Arc::new(RwLock::new(map)) }
    }

    /// Total records across all events
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn key_of<T: AdminRecord>(record: &T) -> Key {
    (record.event_slug().to_string(), record.id().to_string())
}

fn not_found<T: AdminRecord>(event_slug: &str, id: &str) -> ZiggyError {
    ZiggyError::NotFound(format!("{} {id} not found for event {event_slug}", T::KIND))
}

#[async_trait]
impl<T: AdminRecord> RecordStore<T> for InMemoryRecordStore<T> {
    async fn list(&self, event_slug: &str) -> Result<Vec<T>> {
        let mut records: Vec<T> = self
            .records
            .read()
            .iter()
            .filter(|((slug, _), _)| slug == event_slug)
            .map(|(_, record)| record.clone())
            .collect();
        sort_records(&mut records);
        Ok(records)
    }

    async fn get(&self, event_slug: &str, id: &str) -> Result<T> {
        self.records
            .read()
            .get(&(event_slug.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| not_found::<T>(event_slug, id))
    }

    async fn upsert(&self, record: T) -> Result<T> {
        if record.id().trim().is_empty() || record.event_slug().trim().is_empty() {
            return Err(ZiggyError::InvalidInput(format!(
                "{} requires a non-empty id and event slug",
                T::KIND
            )));
        }
        let key = key_of(&record);
        let replaced = self.records.write().insert(key, record.clone()).is_some();
        debug!(kind = T::KIND, id = record.id(), replaced, "record stored");
        Ok(record)
    }

    async fn delete(&self, event_slug: &str, id: &str) -> Result<()> {
        match self.records.write().remove(&(event_slug.to_string(), id.to_string())) {
            Some(_) => {
                debug!(kind = T::KIND, id, "record deleted");
                Ok(())
            }
            None => Err(not_found::<T>(event_slug, id)),
        }
    }
}

impl<T: AdminRecord> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AdminRecord> Clone for InMemoryRecordStore<T> {
    fn clone(&self) -> Self {
        Self { records: Arc::clone(&self.records) }
    }
}

impl<T: AdminRecord> fmt::Debug for InMemoryRecordStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ziggy_domain::{DisplaySize, SponsorTier};

    use super::*;

    fn tier(event: &str, id: &str, sort_order: i32) -> SponsorTier {
        SponsorTier {
            id: id.into(),
            event_slug: event.into(),
            name: id.to_uppercase(),
            label: Default::default(),
            sort_order,
            display_size: DisplaySize::Large,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_is_scoped_to_event_and_sorted() {
        let store = InMemoryRecordStore::with_records([
            tier("demo", "silver", 2),
            tier("demo", "gold", 1),
            tier("other", "platinum", 0),
        ]);

        let ids: Vec<String> =
            store.list("demo").await.unwrap().into_iter().map(|t| t.id).collect();

        assert_eq!(ids, ["gold", "silver"]);
        assert!(store.list("unknown").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let store = InMemoryRecordStore::new();
        store.upsert(tier("demo", "gold", 1)).await.unwrap();

        let mut updated = tier("demo", "gold", 5);
        updated.name = "Goud".into();
        store.upsert(updated).await.unwrap();

        let fetched = store.get("demo", "gold").await.unwrap();
        assert_eq!(fetched.name, "Goud");
        assert_eq!(fetched.sort_order, 5);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn upsert_rejects_empty_identity() {
        let store = InMemoryRecordStore::new();

        let result = store.upsert(tier("demo", " ", 1)).await;

        assert!(matches!(result, Err(ZiggyError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let store = InMemoryRecordStore::<SponsorTier>::new();

        assert!(matches!(store.get("demo", "gold").await, Err(ZiggyError::NotFound(_))));
        assert!(matches!(store.delete("demo", "gold").await, Err(ZiggyError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_only_the_addressed_record() {
        let store =
            InMemoryRecordStore::with_records([tier("demo", "gold", 1), tier("other", "gold", 1)]);

        store.delete("demo", "gold").await.unwrap();

        assert!(store.get("demo", "gold").await.is_err());
        assert!(store.get("other", "gold").await.is_ok());
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = InMemoryRecordStore::new();
        let clone = store.clone();

        clone.upsert(tier("demo", "gold", 1)).await.unwrap();

        assert_eq!(store.len(), 1);
    }
}
