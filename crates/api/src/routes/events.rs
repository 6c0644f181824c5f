//! Event data routes backed by the agenda service
//!
//! Every handler first checks the slug against the configured event, so an
//! unknown event never reaches upstream.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use ziggy_domain::{Agenda, AgendaSession, Booth, NowView, Partnership, PublicEventConfig, Speaker};

use super::{gated, respond};
use crate::context::AppContext;
use crate::error::ApiError;

type Ctx = State<Arc<AppContext>>;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/events/{slug}/config`
pub async fn config(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<PublicEventConfig>, ApiError> {
    let started = Instant::now();
    let result = ctx.ensure_event(&slug).map(|()| ctx.public_config());
    respond("events::config", &slug, started, "Failed to load event config", result)
}

/// `GET /api/events/{slug}/agenda`
pub async fn agenda(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<Arc<Agenda>>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.agenda(&slug)).await;
    respond("events::agenda", &slug, started, "Failed to fetch agenda", result)
}

/// `GET /api/events/{slug}/sessions/now`
pub async fn sessions_now(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<NowView>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.now_view(&slug)).await;
    respond("events::sessions_now", &slug, started, "Failed to fetch current sessions", result)
}

/// `GET /api/events/{slug}/speakers`
pub async fn speakers(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<Arc<Vec<Speaker>>>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.speakers(&slug)).await;
    respond("events::speakers", &slug, started, "Failed to fetch speakers", result)
}

/// `GET /api/events/{slug}/booths`
pub async fn booths(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<Arc<Vec<Booth>>>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.booths(&slug)).await;
    respond("events::booths", &slug, started, "Failed to fetch booths", result)
}

/// `GET /api/events/{slug}/partnerships`
pub async fn partnerships(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> std::result::Result<Json<Arc<Vec<Partnership>>>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.partnerships(&slug)).await;
    respond("events::partnerships", &slug, started, "Failed to fetch partnerships", result)
}

/// `GET /api/events/{slug}/search?q=`
pub async fn search(
    State(ctx): Ctx,
    Path(slug): Path<String>,
    Query(params): Query<SearchParams>,
) -> std::result::Result<Json<Vec<AgendaSession>>, ApiError> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.agenda.search(&slug, &params.q)).await;
    respond("events::search", &slug, started, "Failed to search agenda", result)
}
