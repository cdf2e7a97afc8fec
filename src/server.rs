//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, wires the services and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// The store starts empty and lives exactly as long as the server; nothing
/// is persisted across restarts.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryUrlRepository::new());
    info!("In-memory store initialized");

    let state = AppState::new(
        repository,
        config.base_url.clone(),
        config.top_domains_limit,
    );

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
