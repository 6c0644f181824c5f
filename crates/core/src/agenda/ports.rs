//! Port interfaces for the upstream events provider
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use ziggy_domain::{Booth, Partnership, RawAgendaItem, Result, Speaker};

/// Read-only access to a third-party events API
///
/// One call per logical resource, keyed by event slug. Implementations do
/// not retry and do not transform payloads beyond decoding them; failures
/// surface as `ZiggyError::Upstream` (with the HTTP status when one was
/// received) or `ZiggyError::MalformedData`.
#[async_trait]
pub trait EventsProvider: Send + Sync {
    /// Fetch the full flat agenda for an event
    async fn agenda(&self, api_key: &str, slug: &str) -> Result<Vec<RawAgendaItem>>;

    /// Fetch all speakers of an event
    async fn speakers(&self, api_key: &str, slug: &str) -> Result<Vec<Speaker>>;

    /// Fetch all booths of an event
    async fn booths(&self, api_key: &str, slug: &str) -> Result<Vec<Booth>>;

    /// Fetch all partner organisations of an event
    async fn partnerships(&self, api_key: &str, slug: &str) -> Result<Vec<Partnership>>;

    /// Free-text search over agenda items
    ///
    /// Callers enforce the minimum query length before calling.
    async fn search(&self, api_key: &str, slug: &str, query: &str)
        -> Result<Vec<RawAgendaItem>>;
}
