//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use std::time::Duration;

// Cache configuration
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const MAX_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

// Search
pub const MIN_SEARCH_LENGTH: usize = 4;

// Time handling
pub const DEFAULT_TIMEZONE: &str = "Europe/Amsterdam";
/// Naive local-time layout shared by upstream start/end fields and "now".
pub const LOCAL_INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const LOCAL_INSTANT_LEN: usize = 19;
pub const DATE_PREFIX_LEN: usize = 10;

// Upstream provider
pub const RUN_EVENTS_API_BASE: &str = "https://modesty.runevents.net";
pub const API_KEY_HEADER: &str = "ApiKey";
pub const UPSTREAM_TIMEOUT_SECS: u64 = 15;
pub const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 5 * 60;

// Event defaults
pub const DEFAULT_EVENT_SLUG: &str = "experts-live-netherlands-2026";
pub const DEFAULT_EVENT_NAME: &str = "Experts Live Netherlands 2026";
pub const DEFAULT_LANGUAGE: &str = "nl";
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["nl", "en"];

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_LOG_LEVEL: &str = "info";
