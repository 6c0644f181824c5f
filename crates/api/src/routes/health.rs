use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::HealthReport;

/// `GET /api/health`
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthReport> {
    Json(ctx.health_check())
}
