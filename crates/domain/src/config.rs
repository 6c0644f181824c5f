//! Configuration management

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CACHE_TTL, DEFAULT_EVENT_NAME, DEFAULT_EVENT_SLUG, DEFAULT_HOST, DEFAULT_LANGUAGE,
    DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_TIMEZONE, MAX_CACHE_TTL_SECS,
    MAX_UPSTREAM_TIMEOUT_SECS, RUN_EVENTS_API_BASE, SUPPORTED_LANGUAGES, UPSTREAM_TIMEOUT_SECS,
};
use crate::types::{EventBranding, EventDay};
use crate::{Result, ZiggyError};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheSettings,
    pub event: EventSettings,
    pub log_level: String,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for Environment {
    type Err = ZiggyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ZiggyError::Config(format!("Unknown environment: {other}"))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        })
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

/// Events provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Aggregator cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// The single event this deployment serves
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub timezone: String,
    pub languages: Vec<String>,
    pub default_language: String,
    pub branding: EventBranding,
    pub days: Vec<EventDay>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            cache: CacheSettings::default(),
            event: EventSettings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { base_url: RUN_EVENTS_API_BASE.to_string(), timeout_secs: UPSTREAM_TIMEOUT_SECS }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: CACHE_TTL.as_secs() }
    }
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            slug: DEFAULT_EVENT_SLUG.to_string(),
            name: DEFAULT_EVENT_NAME.to_string(),
            api_key: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            languages: SUPPORTED_LANGUAGES.iter().map(|lang| lang.to_string()).collect(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            branding: EventBranding::default(),
            days: Vec::new(),
        }
    }
}

impl Config {
    /// Reject values the server cannot run with
    ///
    /// # Errors
    /// Returns `ZiggyError::Config` for a zero port, a TTL or timeout outside
    /// its `1..=MAX_*` range, an empty event slug, an unknown time zone, or a
    /// default language that is not among the configured languages.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ZiggyError::Config("server.port must be non-zero".into()));
        }
        if !(1..=MAX_CACHE_TTL_SECS).contains(&self.cache.ttl_secs) {
            return Err(ZiggyError::Config(format!(
                "cache.ttl_secs must be between 1 and {MAX_CACHE_TTL_SECS}"
            )));
        }
        if !(1..=MAX_UPSTREAM_TIMEOUT_SECS).contains(&self.upstream.timeout_secs) {
            return Err(ZiggyError::Config(format!(
                "upstream.timeout_secs must be between 1 and {MAX_UPSTREAM_TIMEOUT_SECS}"
            )));
        }
        if self.upstream.base_url.trim().is_empty() {
            return Err(ZiggyError::Config("upstream.base_url must be set".into()));
        }
        if self.event.slug.trim().is_empty() {
            return Err(ZiggyError::Config("event.slug must be set".into()));
        }
        if self.event.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(ZiggyError::Config(format!(
                "event.timezone is not a known zone: {}",
                self.event.timezone
            )));
        }
        if !self.event.languages.contains(&self.event.default_language) {
            return Err(ZiggyError::Config(format!(
                "event.default_language '{}' is not in event.languages",
                self.event.default_language
            )));
        }
        Ok(())
    }
}
