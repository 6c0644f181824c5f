use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ziggy_domain::ZiggyError;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `fallback_level`.
/// `json` switches to single-line JSON output for log shippers. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_tracing(fallback_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed =
        if json { builder.json().try_init().is_ok() } else { builder.try_init().is_ok() };
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a request with structured fields.
///
/// # Parameters
/// * `route` - Stable route identifier (e.g. `"events::agenda"`).
/// * `slug` - Event slug from the path.
/// * `elapsed` - Time spent handling the request.
/// * `error` - The failure, if the request did not succeed.
///
/// Callers must avoid forwarding sensitive values in `route`.
#[inline]
pub fn log_request_outcome(
    route: &str,
    slug: &str,
    elapsed: Duration,
    error: Option<&ZiggyError>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(route, slug, duration_ms, success = true, "request_completed"),
        Some(err) => warn!(
            route,
            slug,
            duration_ms,
            success = false,
            error_type = error_label(err),
            error = %err,
            "request_failed"
        ),
    }
}

/// Convert a `ZiggyError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ZiggyError) -> &'static str {
    match error {
        ZiggyError::Upstream { .. } => "upstream",
        ZiggyError::MalformedData(_) => "malformed_data",
        ZiggyError::NotFound(_) => "not_found",
        ZiggyError::InvalidInput(_) => "invalid_input",
        ZiggyError::Config(_) => "config",
        ZiggyError::Internal(_) => "internal",
    }
}
