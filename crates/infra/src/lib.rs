//! # Ziggy Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation (reqwest)
//! - The run.events integration implementing `EventsProvider`
//! - Configuration loading from `.env`, environment and TOML/JSON files
//! - In-memory admin record storage implementing `RecordStore`
//!
//! ## Architecture
//! - Implements traits defined in `ziggy-core`
//! - Depends on `ziggy-domain` and `ziggy-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::run_events::RunEventsClient;
pub use storage::InMemoryRecordStore;
