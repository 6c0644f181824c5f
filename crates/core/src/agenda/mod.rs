//! Agenda aggregation
//!
//! Raw items from the events provider are validated, cached, regrouped into
//! days and timeslots, and split into running and upcoming sessions.

pub mod cache_keys;
pub mod grouping;
pub mod now;
pub mod ports;
pub mod service;

pub use ports::EventsProvider;
pub use service::AgendaService;
