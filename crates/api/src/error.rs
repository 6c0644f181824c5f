//! HTTP rendering of domain errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use ziggy_domain::ZiggyError;

/// A `ZiggyError` on its way out of a handler
///
/// `failure` is the client-facing message used when upstream data could not
/// be served; upstream bodies and internal details never reach the client.
#[derive(Debug)]
pub struct ApiError {
    pub error: ZiggyError,
    failure: &'static str,
}

impl ApiError {
    pub fn new(error: ZiggyError, failure: &'static str) -> Self {
        Self { error, failure }
    }

    /// Closure for `map_err` that tags errors with a route-specific message
    pub fn failed(failure: &'static str) -> impl Fn(ZiggyError) -> Self {
        move |error| Self::new(error, failure)
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            ZiggyError::NotFound(_) => StatusCode::NOT_FOUND,
            ZiggyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ZiggyError::Upstream { .. } | ZiggyError::MalformedData(_) => StatusCode::BAD_GATEWAY,
            ZiggyError::Config(_) | ZiggyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.error {
            ZiggyError::NotFound(msg) | ZiggyError::InvalidInput(msg) => msg.clone(),
            ZiggyError::Upstream { .. } | ZiggyError::MalformedData(_) => self.failure.to_string(),
            ZiggyError::Config(_) | ZiggyError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<ZiggyError> for ApiError {
    fn from(error: ZiggyError) -> Self {
        Self::new(error, "Failed to fetch data")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_error_kind() {
        let cases = [
            (ZiggyError::NotFound("Event not found".into()), StatusCode::NOT_FOUND),
            (ZiggyError::InvalidInput("short".into()), StatusCode::BAD_REQUEST),
            (ZiggyError::upstream(401, "bad key"), StatusCode::BAD_GATEWAY),
            (ZiggyError::transport("timed out"), StatusCode::BAD_GATEWAY),
            (ZiggyError::MalformedData("missing".into()), StatusCode::BAD_GATEWAY),
            (ZiggyError::Config("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ZiggyError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn upstream_body_is_not_echoed() {
        let err = ApiError::new(
            ZiggyError::upstream(500, "stack trace with secrets"),
            "Failed to fetch agenda",
        );

        assert_eq!(err.message(), "Failed to fetch agenda");
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError::from(ZiggyError::NotFound("Event not found".into()));

        assert_eq!(err.message(), "Event not found");
    }
}
