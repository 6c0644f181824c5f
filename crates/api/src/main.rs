//! Ziggy - conference kiosk backend
//!
//! Main entry point for the HTTP server.

use ziggy_api::utils::logging::init_tracing;
use ziggy_api::{serve, shutdown_signal, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ziggy_infra::config::load()?;
    init_tracing(&config.log_level, config.server.environment.is_production());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        event = %config.event.slug,
        port = config.server.port,
        "Ziggy API starting"
    );

    let ctx = AppContext::new(config)?;
    serve(ctx, shutdown_signal()).await
}
