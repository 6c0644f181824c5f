//! HTTP routes
//!
//! All routes are read-only JSON endpoints under `/api`.

pub mod admin;
pub mod events;
pub mod health;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use ziggy_domain::{Environment, Result};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::logging::log_request_outcome;

/// Build the application router with tracing and CORS layers
pub fn router(ctx: Arc<AppContext>) -> Router {
    let cors = cors_layer(ctx.config.server.environment);

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/events/{slug}/config", get(events::config))
        .route("/api/events/{slug}/agenda", get(events::agenda))
        .route("/api/events/{slug}/sessions/now", get(events::sessions_now))
        .route("/api/events/{slug}/speakers", get(events::speakers))
        .route("/api/events/{slug}/booths", get(events::booths))
        .route("/api/events/{slug}/partnerships", get(events::partnerships))
        .route("/api/events/{slug}/search", get(events::search))
        .route("/api/events/{slug}/sponsors", get(admin::sponsors))
        .route("/api/events/{slug}/sponsor-tiers", get(admin::sponsor_tiers))
        .route("/api/events/{slug}/floor-maps", get(admin::floor_maps))
        .route("/api/events/{slug}/i18n/{language}", get(admin::i18n))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ctx)
}

/// Any origin outside production; production serves read-only routes to
/// explicitly added origins
fn cors_layer(environment: Environment) -> CorsLayer {
    if environment.is_production() {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(24 * 60 * 60))
    } else {
        CorsLayer::permissive()
    }
}

/// Log the outcome and turn a service result into a JSON response
fn respond<T>(
    route: &'static str,
    slug: &str,
    started: Instant,
    failure: &'static str,
    result: Result<T>,
) -> std::result::Result<Json<T>, ApiError> {
    log_request_outcome(route, slug, started.elapsed(), result.as_ref().err());
    result.map(Json).map_err(ApiError::failed(failure))
}

/// Run `fetch` only when `slug` is the configured event
async fn gated<T>(
    ctx: &AppContext,
    slug: &str,
    fetch: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    ctx.ensure_event(slug)?;
    fetch.await
}
