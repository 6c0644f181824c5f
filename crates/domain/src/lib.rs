//! # Ziggy Domain
//!
//! Business domain types and models for the Ziggy event platform.
//!
//! This crate contains:
//! - Upstream payload types (agenda items, speakers, booths, partnerships)
//! - The structured agenda model (days, timeslots, sessions) and `NowView`
//! - Admin-managed records (sponsors, tiers, floor maps, i18n overrides)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Ingestion validation for local-time fields
//!
//! ## Architecture
//! - No dependencies on other Ziggy crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::validation::{is_local_instant, is_time_group_label, validate_agenda_items};
