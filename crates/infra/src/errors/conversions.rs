//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use ziggy_domain::ZiggyError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ZiggyError);

impl From<InfraError> for ZiggyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ZiggyError> for InfraError {
    fn from(value: ZiggyError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoZiggyError {
    fn into_ziggy(self) -> ZiggyError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ZiggyError */
/* -------------------------------------------------------------------------- */

impl IntoZiggyError for HttpError {
    fn into_ziggy(self) -> ZiggyError {
        if self.is_timeout() {
            return ZiggyError::transport("HTTP request timed out");
        }

        if self.is_connect() {
            return ZiggyError::transport("HTTP connection failure");
        }

        if self.is_decode() {
            return ZiggyError::MalformedData(format!("failed to decode response body: {self}"));
        }

        if self.is_builder() {
            return ZiggyError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return ZiggyError::upstream(status.as_u16(), self.to_string());
        }

        ZiggyError::transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_ziggy())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ZiggyError */
/* -------------------------------------------------------------------------- */

impl IntoZiggyError for JsonError {
    fn into_ziggy(self) -> ZiggyError {
        ZiggyError::MalformedData(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_ziggy())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → ZiggyError */
/* -------------------------------------------------------------------------- */

impl IntoZiggyError for toml::de::Error {
    fn into_ziggy(self) -> ZiggyError {
        ZiggyError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_ziggy())
    }
}
