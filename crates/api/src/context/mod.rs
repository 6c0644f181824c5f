//! Application context - dependency injection container

use std::sync::Arc;

use chrono_tz::Tz;
use tracing::info;
use ziggy_core::{AgendaService, EventsProvider, RecordStore};
use ziggy_domain::{
    Config, FloorMap, I18nOverrides, PublicEventConfig, Result, Sponsor, SponsorTier, ZiggyError,
};
use ziggy_infra::{InMemoryRecordStore, RunEventsClient};

use crate::utils::health::HealthReport;

/// Type alias for admin record store trait objects
type DynRecordStore<T> = dyn RecordStore<T> + Send + Sync + 'static;

/// Admin record stores, one per record kind
#[derive(Clone)]
pub struct RecordStores {
    pub sponsors: Arc<DynRecordStore<Sponsor>>,
    pub sponsor_tiers: Arc<DynRecordStore<SponsorTier>>,
    pub floor_maps: Arc<DynRecordStore<FloorMap>>,
    pub i18n: Arc<DynRecordStore<I18nOverrides>>,
}

impl RecordStores {
    /// Empty process-local stores
    pub fn in_memory() -> Self {
        Self {
            sponsors: Arc::new(InMemoryRecordStore::<Sponsor>::new()),
            sponsor_tiers: Arc::new(InMemoryRecordStore::<SponsorTier>::new()),
            floor_maps: Arc::new(InMemoryRecordStore::<FloorMap>::new()),
            i18n: Arc::new(InMemoryRecordStore::<I18nOverrides>::new()),
        }
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub agenda: AgendaService,
    pub records: RecordStores,
}

impl AppContext {
    /// Wire the run.events client and in-memory record stores from `config`
    ///
    /// # Errors
    /// Returns `ZiggyError::Config` if the upstream client cannot be built or
    /// the event time zone is unknown.
    pub fn new(config: Config) -> Result<Self> {
        let provider: Arc<dyn EventsProvider> = Arc::new(RunEventsClient::new(&config.upstream)?);
        Self::with_provider(config, provider, RecordStores::in_memory())
    }

    /// Wire an explicit provider and record stores (used by tests)
    ///
    /// # Errors
    /// Returns `ZiggyError::Config` if the event time zone is unknown.
    pub fn with_provider(
        config: Config,
        provider: Arc<dyn EventsProvider>,
        records: RecordStores,
    ) -> Result<Self> {
        let zone = config.event.timezone.parse::<Tz>().map_err(|_| {
            ZiggyError::Config(format!("Unknown event timezone: {}", config.event.timezone))
        })?;
        let agenda = AgendaService::with_clock(
            provider,
            config.event.api_key.clone(),
            config.cache.ttl(),
            ziggy_common::SystemClock,
        )
        .with_fallback_zone(zone);

        info!(
            event = %config.event.slug,
            environment = %config.server.environment,
            upstream = %config.upstream.base_url,
            cache_ttl_secs = config.cache.ttl_secs,
            "application context initialised"
        );

        Ok(Self { config, agenda, records })
    }

    /// Reject any slug other than the configured event
    ///
    /// # Errors
    /// Returns `ZiggyError::NotFound("Event not found")` on mismatch.
    pub fn ensure_event(&self, slug: &str) -> Result<()> {
        if slug == self.config.event.slug {
            Ok(())
        } else {
            Err(ZiggyError::NotFound("Event not found".into()))
        }
    }

    /// Event configuration safe to hand to clients
    pub fn public_config(&self) -> PublicEventConfig {
        PublicEventConfig::from(&self.config.event)
    }

    pub fn health_check(&self) -> HealthReport {
        HealthReport::ok(self.agenda.cache_stats())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("event", &self.config.event.slug)
            .field("agenda", &self.agenda)
            .finish_non_exhaustive()
    }
}
