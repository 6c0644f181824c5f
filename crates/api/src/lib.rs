//! # Ziggy API
//!
//! HTTP layer - routes, application context and server entry point.
//!
//! This crate contains:
//! - axum routes (kiosk/admin frontends → backend)
//! - Application context (dependency injection)
//! - Server startup, tracing initialisation and graceful shutdown
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors onto HTTP status codes

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use context::{AppContext, RecordStores};
pub use error::ApiError;
pub use routes::router;

/// Bind the configured address and serve until `shutdown` resolves
///
/// # Errors
/// Fails if the address cannot be bound or the server stops abnormally.
pub async fn serve<F>(ctx: AppContext, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {address}"))?;

    info!(
        %address,
        environment = %ctx.config.server.environment,
        event = %ctx.config.event.slug,
        "Ziggy API listening"
    );

    axum::serve(listener, router(Arc::new(ctx)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    info!("Ziggy API stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!(error = %err, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
