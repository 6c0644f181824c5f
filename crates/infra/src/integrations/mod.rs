//! External service integrations

pub mod run_events;
