//! Core TTL cache implementation
//!
//! Entries expire a fixed duration after they were last `set`. Expiry is
//! checked lazily by `get`; nothing runs in the background.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use super::stats::{CacheStats, MetricsCollector};
use crate::time::{Clock, SystemClock};

/// Default time-to-live for cached entries (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Entry stored in the cache with its absolute expiry instant
///
/// `None` means the TTL reaches past what `Instant` can represent.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Generic thread-safe cache with per-entry expiry
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`; wrap large values in `Arc`)
/// - `C`: Clock type for time-based operations (defaults to `SystemClock`)
///
/// Readers and writers never observe a partially written entry: every
/// operation holds the storage lock for its whole duration, and the last
/// `set` for a key wins.
pub struct TtlCache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    storage: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    default_ttl: Duration,
    metrics: MetricsCollector,
    clock: C,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache with the given default TTL using the system clock
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }

    /// Create a new cache with the five minute [`DEFAULT_TTL`]
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    /// Create a new cache with a custom clock (useful for testing)
    pub fn with_clock(default_ttl: Duration, clock: C) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
            metrics: MetricsCollector::new(),
            clock,
        }
    }

    /// The TTL applied by [`TtlCache::set`]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Get a value from the cache
    ///
    /// Returns `None` if the key is missing. An entry whose expiry has passed
    /// is evicted and reported as missing.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();

        {
            let storage = self.storage.read();
            match storage.get(key) {
                None => {
                    self.metrics.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired(now) => {
                    self.metrics.record_hit();
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent `set` may have refreshed
        // the entry between the two lock acquisitions.
        let mut storage = self.storage.write();
        match storage.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.metrics.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                storage.remove(key);
                self.metrics.record_miss();
                self.metrics.record_expiration();
                debug!("cache entry expired and was evicted");
                None
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Insert a value with the default TTL, overwriting any existing entry
    pub fn set(&self, key: K, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Insert a value with an explicit TTL, overwriting any existing entry
    ///
    /// The expiry is computed from the time of this call. A TTL too large to
    /// add to the current instant never expires.
    pub fn set_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let expires_at = self.clock.now().checked_add(ttl);
        self.storage.write().insert(key, CacheEntry { value, expires_at });
        self.metrics.record_insert();
    }

    /// Remove an entry regardless of its expiry
    ///
    /// Returns `true` if an entry was present.
    pub fn invalidate(&self, key: &K) -> bool {
        self.storage.write().remove(key).is_some()
    }

    /// Clear all entries from the cache
    pub fn clear(&self) {
        self.storage.write().clear();
        self.metrics.reset();
    }

    /// Get the current number of stored entries (expired ones included until
    /// they are observed by `get`)
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len())
    }
}

impl<K, V, C> Clone for TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            default_ttl: self.default_ttl,
            metrics: self.metrics.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<K, V, C> std::fmt::Debug for TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.storage.read().len())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
