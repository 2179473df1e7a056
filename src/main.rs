//! item-catalog server binary

use anyhow::Context;

use item_catalog::api::{create_router, AppState};
use item_catalog::config::AppConfig;
use item_catalog::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    let telemetry = init_tracing(&config)?;

    let state = AppState::for_observer(config.instrumentation.observer);
    tracing::info!(observer = ?config.instrumentation.observer, "Catalog handlers initialised");

    let router = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &served {
        Ok(()) => tracing::info!("Server stopped"),
        Err(err) => tracing::error!(error = %err, "Server exited with error"),
    }
    telemetry.shutdown();

    served.context("HTTP server failed")
}

/// Wait for Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
