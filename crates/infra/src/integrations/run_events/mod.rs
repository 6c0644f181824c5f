//! run.events integration
//!
//! Implements the `EventsProvider` port against the run.events v2 API.
//!
//! # Wire conventions
//!
//! - The API key travels in an `ApiKey` request header, never in the URL.
//! - Bulk resources (`agenda`, `speakers`, `booths`, `partnerships`) are
//!   fetched with a body-less `POST /v2/events/<slug>/<resource>`.
//! - Search is `GET /v2/events/<slug>/agenda/search?q=<query>`.
//! - Every endpoint answers with a flat JSON array.
//!
//! # Usage
//!
//! ```no_run
//! use ziggy_core::EventsProvider;
//! use ziggy_domain::UpstreamConfig;
//! use ziggy_infra::RunEventsClient;
//!
//! # async fn example() -> ziggy_domain::Result<()> {
//! let client = RunEventsClient::new(&UpstreamConfig::default())?;
//! let items = client.agenda("api-key", "experts-live-netherlands-2026").await?;
//! println!("{} agenda items", items.len());
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::RunEventsClient;
