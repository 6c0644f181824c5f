//! Shared helpers for `ziggy-api` route tests.
//!
//! Builds an application context around a scripted events provider and
//! seeded in-memory record stores, and drives the router with `oneshot`.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use ziggy_api::{router, AppContext, RecordStores};
use ziggy_core::EventsProvider;
use ziggy_domain::{
    Booth, Config, DisplaySize, ElementKind, I18nOverrides, Partnership, RawAgendaItem, Result,
    Speaker, Sponsor, SponsorTier, UpstreamId, ZiggyError,
};
use ziggy_infra::InMemoryRecordStore;

pub const SLUG: &str = "demo-event";
pub const API_KEY: &str = "test-api-key";

/// Events provider returning fixed payloads, or a fixed error
#[derive(Default)]
pub struct ScriptedProvider {
    pub agenda: Vec<RawAgendaItem>,
    pub failure: Mutex<Option<ZiggyError>>,
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn with_agenda(agenda: Vec<RawAgendaItem>) -> Self {
        Self { agenda, ..Self::default() }
    }

    pub fn failing(error: ZiggyError) -> Self {
        Self { failure: Mutex::new(Some(error)), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, api_key: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(api_key, API_KEY, "configured API key must be forwarded");
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventsProvider for ScriptedProvider {
    async fn agenda(&self, api_key: &str, _slug: &str) -> Result<Vec<RawAgendaItem>> {
        self.check(api_key)?;
        Ok(self.agenda.clone())
    }

    async fn speakers(&self, api_key: &str, _slug: &str) -> Result<Vec<Speaker>> {
        self.check(api_key)?;
        Ok(vec![Speaker {
            id: UpstreamId::Number(1),
            unique_id: None,
            name: "Ada Lovelace".into(),
            tagline: Some("Analyst".into()),
            company: None,
            biography: None,
            image: None,
        }])
    }

    async fn booths(&self, api_key: &str, _slug: &str) -> Result<Vec<Booth>> {
        self.check(api_key)?;
        Ok(vec![Booth {
            id: UpstreamId::Text("b1".into()),
            name: "Contoso".into(),
            description: None,
            booth_number: Some("12".into()),
            location: None,
            organization: None,
            logo_url: None,
            website: None,
            labels: vec![],
        }])
    }

    async fn partnerships(&self, api_key: &str, _slug: &str) -> Result<Vec<Partnership>> {
        self.check(api_key)?;
        Ok(vec![Partnership {
            id: UpstreamId::Number(3),
            organization_name: "Fabrikam".into(),
            level: Some("Gold".into()),
            description: None,
            logo_url: None,
            website: None,
            booth_number: None,
        }])
    }

    async fn search(
        &self,
        api_key: &str,
        _slug: &str,
        query: &str,
    ) -> Result<Vec<RawAgendaItem>> {
        self.check(api_key)?;
        Ok(self
            .agenda
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect())
    }
}

pub fn item(
    id: i64,
    kind: ElementKind,
    title: &str,
    start: &str,
    end: &str,
    group: &str,
) -> RawAgendaItem {
    RawAgendaItem {
        id,
        unique_id: format!("item-{id}"),
        element_type: kind,
        title: title.to_string(),
        description: None,
        room_name: "Zaal 1".to_string(),
        room_id: 1,
        start_date: start.to_string(),
        end_date: end.to_string(),
        start_time_group: group.to_string(),
        time_zone: "Europe/Amsterdam".to_string(),
        speakers: vec![],
        labels: vec![],
    }
}

/// A fixed two-day conference
pub fn conference() -> Vec<RawAgendaItem> {
    use ElementKind::{NonContentBlock, Session};

    vec![
        item(100, NonContentBlock, "Registration", "2026-06-01T08:00:00", "2026-06-01T08:30:00", "08:00"),
        item(1, Session, "Zero Trust in practice", "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30"),
        item(2, Session, "Intune deep dive", "2026-06-01T08:30:00", "2026-06-01T09:15:00", "08:30"),
        item(3, Session, "Entra ID governance", "2026-06-02T09:30:00", "2026-06-02T10:15:00", "09:30"),
    ]
}

/// Sessions spanning the real wall clock: one running, two upcoming
pub fn around_now() -> Vec<RawAgendaItem> {
    use ElementKind::Session;

    vec![
        item(1, Session, "Long running", "2000-01-01T00:00:00", "2099-12-31T23:00:00", "00:00"),
        item(2, Session, "Future A", "2099-12-31T23:15:00", "2099-12-31T23:45:00", "23:15"),
        item(3, Session, "Future B", "2099-12-31T23:15:00", "2099-12-31T23:30:00", "23:15"),
    ]
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.event.slug = SLUG.to_string();
    config.event.api_key = API_KEY.to_string();
    config
}

/// Record stores seeded with sponsors, tiers and Dutch overrides
pub fn seeded_records() -> RecordStores {
    let now = Utc::now();
    let sponsor = |id: &str, tier: &str, sort_order: i32| Sponsor {
        id: id.into(),
        event_slug: SLUG.into(),
        name: id.to_uppercase(),
        tier_id: tier.into(),
        description: BTreeMap::new(),
        logo_url: format!("https://cdn.example.test/{id}.png"),
        website: None,
        booth_number: None,
        sort_order,
        created_at: now,
        updated_at: now,
    };
    let tier = |id: &str, sort_order: i32| SponsorTier {
        id: id.into(),
        event_slug: SLUG.into(),
        name: id.to_uppercase(),
        label: BTreeMap::new(),
        sort_order,
        display_size: DisplaySize::Large,
        created_at: now,
        updated_at: now,
    };
    let dutch = I18nOverrides {
        id: "nl".into(),
        event_slug: SLUG.into(),
        language: "nl".into(),
        overrides: BTreeMap::from([("agenda.title".to_string(), "Programma".to_string())]),
        updated_at: now,
    };

    let mut foreign = sponsor("northwind", "gold", 0);
    foreign.event_slug = "another-event".into();

    RecordStores {
        sponsors: Arc::new(InMemoryRecordStore::with_records([
            sponsor("contoso", "gold", 2),
            sponsor("fabrikam", "gold", 1),
            foreign,
        ])),
        sponsor_tiers: Arc::new(InMemoryRecordStore::with_records([
            tier("silver", 2),
            tier("gold", 1),
        ])),
        floor_maps: Arc::new(InMemoryRecordStore::new()),
        i18n: Arc::new(InMemoryRecordStore::with_records([dutch])),
    }
}

pub fn app_with(provider: Arc<ScriptedProvider>) -> Router {
    app_with_config(provider, test_config())
}

pub fn app_with_config(provider: Arc<ScriptedProvider>, config: Config) -> Router {
    let ctx = AppContext::with_provider(config, provider, seeded_records()).unwrap();
    router(Arc::new(ctx))
}

/// Send a GET request and decode the JSON response
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
