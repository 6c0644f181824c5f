//! Health report returned by `GET /api/health`

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use ziggy_common::CacheStats;

/// Liveness plus a summary of the aggregator caches
///
/// # Example Response
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2026-06-01T06:45:00.000Z",
///   "cache": { "entries": 3, "hits": 42, "misses": 3, "hitRate": 0.933 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub cache: CacheSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheSummary {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    #[serde(rename = "hitRate")]
    pub hit_rate: f64,
}

impl HealthReport {
    pub fn ok(stats: CacheStats) -> Self {
        Self::at(Utc::now(), stats)
    }

    pub fn at(now: DateTime<Utc>, stats: CacheStats) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            cache: CacheSummary {
                entries: stats.size,
                hits: stats.hits,
                misses: stats.misses,
                hit_rate: stats.hit_rate(),
            },
        }
    }
}
