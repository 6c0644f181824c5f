//! Modular common utilities shared across Ziggy crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `runtime`: shared-state infrastructure (clock abstraction, TTL cache)
//! - `test-utils`: everything in `runtime`, intended for dev-dependencies

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;
#[cfg(feature = "runtime")]
pub mod time;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use cache::{CacheStats, TtlCache, DEFAULT_TTL};
#[cfg(feature = "runtime")]
pub use time::{Clock, MockClock, SystemClock};
