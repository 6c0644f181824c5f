//! Agenda service - cached aggregation over the events provider
//!
//! Every resource is cached per event under its own key (see
//! [`super::cache_keys`]). On a miss the upstream fetch runs on a spawned
//! task that stores the result itself, so a request that is dropped while
//! waiting still leaves a warm cache for the next one. Failed fetches never
//! touch the cache.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};
use ziggy_common::cache::{CacheStats, TtlCache};
use ziggy_common::time::{Clock, SystemClock};
use ziggy_domain::constants::{CACHE_TTL, MIN_SEARCH_LENGTH};
use ziggy_domain::{
    validate_agenda_items, Agenda, AgendaSession, Booth, NowView, Partnership, RawAgendaItem,
    Result, Speaker, ZiggyError,
};

use super::cache_keys;
use super::grouping::build_agenda;
use super::now::compute_now_view;
use super::ports::EventsProvider;

type Cache<T, C> = TtlCache<String, Arc<T>, C>;

/// Agenda aggregator
///
/// Cheap to clone; clones share caches and provider.
pub struct AgendaService<C: Clock + Clone = SystemClock> {
    provider: Arc<dyn EventsProvider>,
    api_key: Arc<str>,
    fallback_zone: Tz,
    clock: C,
    agenda: Cache<Agenda, C>,
    raw: Cache<Vec<RawAgendaItem>, C>,
    speakers: Cache<Vec<Speaker>, C>,
    booths: Cache<Vec<Booth>, C>,
    partnerships: Cache<Vec<Partnership>, C>,
}

impl AgendaService<SystemClock> {
    /// Create a service with the five minute default TTL and the system clock
    pub fn new(provider: Arc<dyn EventsProvider>, api_key: impl Into<String>) -> Self {
        Self::with_clock(provider, api_key, CACHE_TTL, SystemClock)
    }
}

impl<C: Clock + Clone> AgendaService<C> {
    /// Create a service with an explicit TTL and clock
    ///
    /// The clock drives both cache expiry and the wall-clock "now" used by
    /// [`AgendaService::now_view`].
    pub fn with_clock(
        provider: Arc<dyn EventsProvider>,
        api_key: impl Into<String>,
        ttl: Duration,
        clock: C,
    ) -> Self {
        Self {
            provider,
            api_key: Arc::from(api_key.into()),
            fallback_zone: chrono_tz::Europe::Amsterdam,
            agenda: TtlCache::with_clock(ttl, clock.clone()),
            raw: TtlCache::with_clock(ttl, clock.clone()),
            speakers: TtlCache::with_clock(ttl, clock.clone()),
            booths: TtlCache::with_clock(ttl, clock.clone()),
            partnerships: TtlCache::with_clock(ttl, clock.clone()),
            clock,
        }
    }

    /// Zone used for "now" when an event has no agenda items yet
    pub fn with_fallback_zone(mut self, zone: Tz) -> Self {
        self.fallback_zone = zone;
        self
    }

    /// Structured agenda for an event
    ///
    /// # Errors
    /// Upstream and validation errors from the raw fetch are returned as-is.
    pub async fn agenda(&self, slug: &str) -> Result<Arc<Agenda>> {
        let key = cache_keys::agenda(slug);
        if let Some(agenda) = self.agenda.get(&key) {
            debug!(slug, "agenda cache hit");
            return Ok(agenda);
        }

        let items = self.raw_items(slug).await?;
        let agenda = Arc::new(build_agenda(&items));
        info!(
            slug,
            days = agenda.days.len(),
            sessions = agenda.session_count(),
            "agenda aggregated"
        );
        self.agenda.set(key, Arc::clone(&agenda));
        Ok(agenda)
    }

    /// Sessions running now and those in the next timeslot
    ///
    /// Computed per call from the cached raw items; never cached itself.
    ///
    /// # Errors
    /// Upstream and validation errors from the raw fetch are returned as-is.
    pub async fn now_view(&self, slug: &str) -> Result<NowView> {
        let items = self.raw_items(slug).await?;
        compute_now_view(&items, self.wall_clock_now(), self.fallback_zone)
    }

    /// Validated flat agenda items, cached under `agenda-raw:<slug>`
    ///
    /// # Errors
    /// Returns `ZiggyError::MalformedData` if any item fails validation; the
    /// payload is then not cached.
    pub async fn raw_items(&self, slug: &str) -> Result<Arc<Vec<RawAgendaItem>>> {
        let provider = Arc::clone(&self.provider);
        let api_key = Arc::clone(&self.api_key);
        let owned_slug = slug.to_string();
        let fetch = async move {
            let items = provider.agenda(&api_key, &owned_slug).await?;
            validate_agenda_items(&items)?;
            Ok(items)
        };
        cached_fetch(&self.raw, cache_keys::agenda_raw(slug), "agenda-raw", fetch).await
    }

    /// All speakers of an event, cached under `speakers:<slug>`
    ///
    /// # Errors
    /// Upstream errors are returned as-is.
    pub async fn speakers(&self, slug: &str) -> Result<Arc<Vec<Speaker>>> {
        let provider = Arc::clone(&self.provider);
        let api_key = Arc::clone(&self.api_key);
        let owned_slug = slug.to_string();
        let fetch = async move { provider.speakers(&api_key, &owned_slug).await };
        cached_fetch(&self.speakers, cache_keys::speakers(slug), "speakers", fetch).await
    }

    /// All booths of an event, cached under `booths:<slug>`
    ///
    /// # Errors
    /// Upstream errors are returned as-is.
    pub async fn booths(&self, slug: &str) -> Result<Arc<Vec<Booth>>> {
        let provider = Arc::clone(&self.provider);
        let api_key = Arc::clone(&self.api_key);
        let owned_slug = slug.to_string();
        let fetch = async move { provider.booths(&api_key, &owned_slug).await };
        cached_fetch(&self.booths, cache_keys::booths(slug), "booths", fetch).await
    }

    /// All partner organisations of an event, cached under
    /// `partnerships:<slug>`
    ///
    /// # Errors
    /// Upstream errors are returned as-is.
    pub async fn partnerships(&self, slug: &str) -> Result<Arc<Vec<Partnership>>> {
        let provider = Arc::clone(&self.provider);
        let api_key = Arc::clone(&self.api_key);
        let owned_slug = slug.to_string();
        let fetch = async move { provider.partnerships(&api_key, &owned_slug).await };
        cached_fetch(&self.partnerships, cache_keys::partnerships(slug), "partnerships", fetch)
            .await
    }

    /// Search agenda sessions by free text
    ///
    /// The query is trimmed first. Results are not cached.
    ///
    /// # Errors
    /// Returns `ZiggyError::InvalidInput` for queries shorter than
    /// [`MIN_SEARCH_LENGTH`] characters without calling upstream, and
    /// upstream or validation errors otherwise.
    pub async fn search(&self, slug: &str, query: &str) -> Result<Vec<AgendaSession>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LENGTH {
            return Err(ZiggyError::InvalidInput(format!(
                "search query must be at least {MIN_SEARCH_LENGTH} characters"
            )));
        }

        let started = Instant::now();
        let items = self.provider.search(&self.api_key, slug, query).await?;
        validate_agenda_items(&items)?;
        let sessions: Vec<AgendaSession> =
            items.iter().filter(|item| item.is_session()).map(AgendaSession::from).collect();

        debug!(
            slug,
            results = sessions.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "agenda search completed"
        );
        Ok(sessions)
    }

    /// Drop every cached resource of one event
    pub fn invalidate(&self, slug: &str) {
        self.agenda.invalidate(&cache_keys::agenda(slug));
        self.raw.invalidate(&cache_keys::agenda_raw(slug));
        self.speakers.invalidate(&cache_keys::speakers(slug));
        self.booths.invalidate(&cache_keys::booths(slug));
        self.partnerships.invalidate(&cache_keys::partnerships(slug));
        info!(slug, "event caches invalidated");
    }

    /// Combined statistics over all resource caches
    pub fn cache_stats(&self) -> CacheStats {
        [
            self.agenda.stats(),
            self.raw.stats(),
            self.speakers.stats(),
            self.booths.stats(),
            self.partnerships.stats(),
        ]
        .into_iter()
        .fold(CacheStats::default(), |acc, s| CacheStats {
            size: acc.size + s.size,
            hits: acc.hits + s.hits,
            misses: acc.misses + s.misses,
            inserts: acc.inserts + s.inserts,
            expirations: acc.expirations + s.expirations,
        })
    }

    fn wall_clock_now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.clock.system_time())
    }
}

impl<C: Clock + Clone> Clone for AgendaService<C> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            api_key: Arc::clone(&self.api_key),
            fallback_zone: self.fallback_zone,
            clock: self.clock.clone(),
            agenda: self.agenda.clone(),
            raw: self.raw.clone(),
            speakers: self.speakers.clone(),
            booths: self.booths.clone(),
            partnerships: self.partnerships.clone(),
        }
    }
}

impl<C: Clock + Clone> std::fmt::Debug for AgendaService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgendaService")
            .field("fallback_zone", &self.fallback_zone)
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}

/// Serve `key` from `cache`, or run `fetch` on its own task and store the
/// result there
async fn cached_fetch<T, C, F>(
    cache: &Cache<T, C>,
    key: String,
    resource: &'static str,
    fetch: F,
) -> Result<Arc<T>>
where
    T: Send + Sync + 'static,
    C: Clock + Clone,
    F: Future<Output = Result<T>> + Send + 'static,
{
    if let Some(value) = cache.get(&key) {
        debug!(%key, "cache hit");
        return Ok(value);
    }
    debug!(%key, "cache miss, fetching from upstream");

    let cache = cache.clone();
    let task = tokio::spawn(async move {
        let started = Instant::now();
        match fetch.await {
            Ok(value) => {
                let value = Arc::new(value);
                cache.set(key.clone(), Arc::clone(&value));
                debug!(
                    %key,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "upstream fetch cached"
                );
                Ok(value)
            }
            Err(err) => {
                warn!(%key, resource, error = %err, "upstream fetch failed");
                Err(err)
            }
        }
    });

    task.await
        .map_err(|err| ZiggyError::Internal(format!("{resource} fetch task failed: {err}")))?
}
