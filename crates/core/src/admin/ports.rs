//! Port interface for admin record persistence
//!
//! Durability is up to the adapter; the in-memory adapter in `ziggy-infra`
//! keeps records for the lifetime of the process.

use async_trait::async_trait;
use ziggy_domain::{AdminRecord, Result};

/// Keyed storage for one kind of admin record, scoped by event
#[async_trait]
pub trait RecordStore<T: AdminRecord>: Send + Sync {
    /// All records of an event, ordered by `sort_order` then id
    async fn list(&self, event_slug: &str) -> Result<Vec<T>>;

    /// A single record
    ///
    /// # Errors
    /// Returns `ZiggyError::NotFound` if the record does not exist.
    async fn get(&self, event_slug: &str, id: &str) -> Result<T>;

    /// Insert or replace a record, keyed by its event and id
    async fn upsert(&self, record: T) -> Result<T>;

    /// Remove a record
    ///
    /// # Errors
    /// Returns `ZiggyError::NotFound` if the record does not exist.
    async fn delete(&self, event_slug: &str, id: &str) -> Result<()>;
}
