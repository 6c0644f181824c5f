//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Ziggy
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ZiggyError {
    /// The events provider answered with a non-2xx status, or no response
    /// arrived at all (`status` is `None` on transport failure or timeout).
    #[error("Upstream error{}: {body}", status_suffix(.status))]
    Upstream { status: Option<u16>, body: String },

    #[error("Malformed upstream data: {0}")]
    MalformedData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ZiggyError {
    /// Build an `Upstream` error for a response that carried a status code.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream { status: Some(status), body: body.into() }
    }

    /// Build an `Upstream` error for a request that never got a response.
    pub fn transport(body: impl Into<String>) -> Self {
        Self::Upstream { status: None, body: body.into() }
    }

    /// Whether the caller may reasonably retry the operation later.
    ///
    /// Only upstream failures are transient; malformed payloads and bad
    /// input will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Upstream HTTP status, when one was received.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {code})")).unwrap_or_default()
}

/// Result type alias for Ziggy operations
pub type Result<T> = std::result::Result<T, ZiggyError>;
