//! Time-to-live cache for shared, process-local state
//!
//! [`TtlCache`] is a generic key → value store where every entry carries an
//! absolute expiry instant. Expiry is lazy: an expired entry is evicted by the
//! `get` that observes it, there is no background sweep and no size bound.
//!
//! # Thread Safety
//!
//! The cache is internally synchronised and cheap to clone (clones share the
//! same storage), so a single instance can be handed to every in-flight
//! request:
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use ziggy_common::cache::TtlCache;
//!
//! let cache: TtlCache<String, u32> = TtlCache::with_default_ttl();
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let cache = cache.clone();
//!         thread::spawn(move || cache.set(format!("key-{i}"), i))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 4);
//! ```
//!
//! ## Deterministic expiry in tests
//! ```
//! use std::time::Duration;
//!
//! use ziggy_common::cache::TtlCache;
//! use ziggy_common::time::MockClock;
//!
//! let clock = MockClock::new();
//! let cache = TtlCache::with_clock(Duration::from_secs(10), clock.clone());
//! cache.set("agenda:demo".to_string(), 1);
//!
//! clock.advance(Duration::from_secs(10));
//! assert_eq!(cache.get(&"agenda:demo".to_string()), None);
//! ```

mod stats;
mod store;

// Re-export public API
pub use stats::CacheStats;
pub use store::{TtlCache, DEFAULT_TTL};
