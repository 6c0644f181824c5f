//! Shared test helpers for `ziggy-core` integration tests.
//!
//! These helpers provide reusable fixtures and a lightweight events provider
//! mock so that service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod provider;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{TimeZone, Utc};
use ziggy_common::time::MockClock;
use ziggy_core::AgendaService;

pub use provider::MockEventsProvider;

pub const SLUG: &str = "demo-event";
pub const API_KEY: &str = "test-api-key";
pub const TTL: Duration = Duration::from_secs(300);

/// Mock clock whose wall time is the given UTC instant
pub fn clock_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> MockClock {
    let instant = Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap();
    MockClock::with_system_time(SystemTime::from(instant))
}

/// Service wired to a fresh mock provider and the given clock
pub fn service_with(
    provider: &MockEventsProvider,
    clock: &MockClock,
) -> AgendaService<MockClock> {
    AgendaService::with_clock(Arc::new(provider.clone()), API_KEY, TTL, clock.clone())
}
