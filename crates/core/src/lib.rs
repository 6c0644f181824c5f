//! # Ziggy Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the events provider and the admin record
//!   store
//! - Agenda grouping and now-window computation
//! - `AgendaService`, the cached aggregator behind every kiosk read
//!
//! ## Architecture Principles
//! - Only depends on `ziggy-common` and `ziggy-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod admin;
pub mod agenda;

// Re-export specific items to avoid ambiguity
pub use admin::ports::RecordStore;
pub use admin::sort_records;
pub use agenda::grouping::build_agenda;
pub use agenda::now::{compute_now_view, local_now, now_view_at};
pub use agenda::ports::EventsProvider;
pub use agenda::AgendaService;
