/// run.events v2 API client
use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ziggy_core::EventsProvider;
use ziggy_domain::constants::API_KEY_HEADER;
use ziggy_domain::{
    Booth, Partnership, RawAgendaItem, Result, Speaker, UpstreamConfig, ZiggyError,
};

use crate::errors::InfraError;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("ziggy/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an upstream error body carried into `ZiggyError`
const MAX_ERROR_BODY: usize = 512;

/// Client for the run.events v2 API
#[derive(Clone, Debug)]
pub struct RunEventsClient {
    base_url: Url,
    http_client: HttpClient,
}

impl RunEventsClient {
    /// Create a client from upstream configuration
    ///
    /// # Errors
    /// Returns `ZiggyError::Config` if the base URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client =
            HttpClient::builder().timeout(config.timeout()).user_agent(USER_AGENT).build()?;
        Self::with_http_client(&config.base_url, http_client)
    }

    /// Create a client with a preconfigured HTTP client (useful for tests)
    ///
    /// # Errors
    /// Returns `ZiggyError::Config` if `base_url` does not parse as an
    /// absolute URL.
    pub fn with_http_client(base_url: &str, http_client: HttpClient) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ZiggyError::Config(format!("Invalid run.events base URL {base_url:?}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ZiggyError::Config(format!(
                "run.events base URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self { base_url, http_client })
    }

    /// `<base>/v2/events/<slug>/<segments...>` with each segment escaped
    fn endpoint(&self, slug: &str, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ZiggyError::Config("run.events base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v2", "events", slug])
            .extend(segments);
        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        api_key: &str,
        method: Method,
        url: Url,
    ) -> Result<T> {
        let path = url.path().to_string();
        let request = self.http_client.request(method.clone(), url).header(API_KEY_HEADER, api_key);

        let response = self.http_client.send(request).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ZiggyError::from(InfraError::from(e)))?;

        if !status.is_success() {
            warn!(%method, %path, %status, "run.events request failed");
            return Err(ZiggyError::upstream(status.as_u16(), truncate(&body)));
        }

        let parsed = serde_json::from_str(&body).map_err(|e| {
            let err = ZiggyError::from(InfraError::from(e));
            warn!(%method, %path, error = %err, "run.events payload rejected");
            err
        })?;
        debug!(%method, %path, bytes = body.len(), "run.events payload decoded");
        Ok(parsed)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        api_key: &str,
        slug: &str,
        resource: &str,
    ) -> Result<Vec<T>> {
        let url = self.endpoint(slug, &[resource])?;
        self.request(api_key, Method::POST, url).await
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[async_trait]
impl EventsProvider for RunEventsClient {
    async fn agenda(&self, api_key: &str, slug: &str) -> Result<Vec<RawAgendaItem>> {
        self.fetch_list(api_key, slug, "agenda").await
    }

    async fn speakers(&self, api_key: &str, slug: &str) -> Result<Vec<Speaker>> {
        self.fetch_list(api_key, slug, "speakers").await
    }

    async fn booths(&self, api_key: &str, slug: &str) -> Result<Vec<Booth>> {
        self.fetch_list(api_key, slug, "booths").await
    }

    async fn partnerships(&self, api_key: &str, slug: &str) -> Result<Vec<Partnership>> {
        self.fetch_list(api_key, slug, "partnerships").await
    }

    async fn search(
        &self,
        api_key: &str,
        slug: &str,
        query: &str,
    ) -> Result<Vec<RawAgendaItem>> {
        let mut url = self.endpoint(slug, &["agenda", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.request(api_key, Method::GET, url).await
    }
}
