//! In-memory mock for the `EventsProvider` port
//!
//! Serves fixed payloads, counts calls per resource, records the last API key
//! and query it saw, and can be switched to fail or to hold agenda fetches
//! until released.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use ziggy_core::EventsProvider;
use ziggy_domain::{
    Booth, Partnership, RawAgendaItem, Result as DomainResult, Speaker, UpstreamId, ZiggyError,
};

#[derive(Default)]
struct State {
    agenda: Vec<RawAgendaItem>,
    search_results: Vec<RawAgendaItem>,
    speakers: Vec<Speaker>,
    booths: Vec<Booth>,
    partnerships: Vec<Partnership>,
    failure: Option<ZiggyError>,
    calls: HashMap<&'static str, usize>,
    last_api_key: Option<String>,
    last_query: Option<String>,
}

#[derive(Default, Clone)]
pub struct MockEventsProvider {
    state: Arc<Mutex<State>>,
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl MockEventsProvider {
    pub fn new(agenda: Vec<RawAgendaItem>) -> Self {
        let provider = Self::default();
        provider.set_agenda(agenda);
        provider
    }

    pub fn set_agenda(&self, agenda: Vec<RawAgendaItem>) {
        self.state.lock().unwrap().agenda = agenda;
    }

    pub fn set_search_results(&self, items: Vec<RawAgendaItem>) {
        self.state.lock().unwrap().search_results = items;
    }

    pub fn with_speakers(self, names: &[&str]) -> Self {
        self.state.lock().unwrap().speakers = names
            .iter()
            .enumerate()
            .map(|(i, name)| Speaker {
                id: UpstreamId::Number(i as i64 + 1),
                unique_id: None,
                name: (*name).to_string(),
                tagline: None,
                company: None,
                biography: None,
                image: None,
            })
            .collect();
        self
    }

    pub fn with_booths(self, names: &[&str]) -> Self {
        self.state.lock().unwrap().booths = names
            .iter()
            .enumerate()
            .map(|(i, name)| Booth {
                id: UpstreamId::Text(format!("b{}", i + 1)),
                name: (*name).to_string(),
                description: None,
                booth_number: Some(format!("{}", i + 1)),
                location: None,
                organization: None,
                logo_url: None,
                website: None,
                labels: vec![],
            })
            .collect();
        self
    }

    pub fn with_partnerships(self, names: &[&str]) -> Self {
        self.state.lock().unwrap().partnerships = names
            .iter()
            .enumerate()
            .map(|(i, name)| Partnership {
                id: UpstreamId::Number(i as i64 + 1),
                organization_name: (*name).to_string(),
                level: Some("Gold".to_string()),
                description: None,
                logo_url: None,
                website: None,
                booth_number: None,
            })
            .collect();
        self
    }

    /// Make every subsequent call fail with `error`
    pub fn fail_with(&self, error: ZiggyError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().failure = None;
    }

    /// Hold agenda fetches until the returned handle is notified
    pub fn hold_agenda(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&notify));
        notify
    }

    pub fn calls(&self, resource: &str) -> usize {
        self.state.lock().unwrap().calls.get(resource).copied().unwrap_or(0)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.state.lock().unwrap().last_api_key.clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.state.lock().unwrap().last_query.clone()
    }

    fn record(&self, resource: &'static str, api_key: &str) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        *state.calls.entry(resource).or_insert(0) += 1;
        state.last_api_key = Some(api_key.to_string());
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventsProvider for MockEventsProvider {
    async fn agenda(&self, api_key: &str, _slug: &str) -> DomainResult<Vec<RawAgendaItem>> {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.record("agenda", api_key)?;
        Ok(self.state.lock().unwrap().agenda.clone())
    }

    async fn speakers(&self, api_key: &str, _slug: &str) -> DomainResult<Vec<Speaker>> {
        self.record("speakers", api_key)?;
        Ok(self.state.lock().unwrap().speakers.clone())
    }

    async fn booths(&self, api_key: &str, _slug: &str) -> DomainResult<Vec<Booth>> {
        self.record("booths", api_key)?;
        Ok(self.state.lock().unwrap().booths.clone())
    }

    async fn partnerships(&self, api_key: &str, _slug: &str) -> DomainResult<Vec<Partnership>> {
        self.record("partnerships", api_key)?;
        Ok(self.state.lock().unwrap().partnerships.clone())
    }

    async fn search(
        &self,
        api_key: &str,
        _slug: &str,
        query: &str,
    ) -> DomainResult<Vec<RawAgendaItem>> {
        self.record("search", api_key)?;
        let mut state = self.state.lock().unwrap();
        state.last_query = Some(query.to_string());
        Ok(state.search_results.clone())
    }
}
