//! Read access to admin-managed records

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use ziggy_core::RecordStore;
use ziggy_domain::{FloorMap, Result, Sponsor, SponsorTier, ZiggyError};

use super::{gated, respond};
use crate::context::AppContext;
use crate::error::ApiError;

type Ctx = State<Arc<AppContext>>;
type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// `GET /api/events/{slug}/sponsors`
pub async fn sponsors(State(ctx): Ctx, Path(slug): Path<String>) -> ApiResult<Vec<Sponsor>> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.records.sponsors.list(&slug)).await;
    respond("admin::sponsors", &slug, started, "Failed to load sponsors", result)
}

/// `GET /api/events/{slug}/sponsor-tiers`
pub async fn sponsor_tiers(
    State(ctx): Ctx,
    Path(slug): Path<String>,
) -> ApiResult<Vec<SponsorTier>> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.records.sponsor_tiers.list(&slug)).await;
    respond("admin::sponsor_tiers", &slug, started, "Failed to load sponsor tiers", result)
}

/// `GET /api/events/{slug}/floor-maps`
pub async fn floor_maps(State(ctx): Ctx, Path(slug): Path<String>) -> ApiResult<Vec<FloorMap>> {
    let started = Instant::now();
    let result = gated(&ctx, &slug, ctx.records.floor_maps.list(&slug)).await;
    respond("admin::floor_maps", &slug, started, "Failed to load floor maps", result)
}

/// `GET /api/events/{slug}/i18n/{language}`
///
/// Returns the override map for one of the event's languages; a language
/// without overrides yields an empty object.
pub async fn i18n(
    State(ctx): Ctx,
    Path((slug, language)): Path<(String, String)>,
) -> ApiResult<BTreeMap<String, String>> {
    let started = Instant::now();
    let result = i18n_overrides(&ctx, &slug, &language).await;
    respond("admin::i18n", &slug, started, "Failed to load translations", result)
}

async fn i18n_overrides(
    ctx: &AppContext,
    slug: &str,
    language: &str,
) -> Result<BTreeMap<String, String>> {
    ctx.ensure_event(slug)?;
    if !ctx.config.event.languages.iter().any(|lang| lang == language) {
        return Err(ZiggyError::NotFound(format!("Language not supported: {language}")));
    }

    let records = ctx.records.i18n.list(slug).await?;
    Ok(records
        .into_iter()
        .find(|record| record.language == language)
        .map(|record| record.overrides)
        .unwrap_or_default())
}
