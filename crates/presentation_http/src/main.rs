//! Cafetale HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{CafeService, ports::PlaceSearchPort};
use infrastructure::{AppConfig, GooglePlacesAdapter, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; the guard flushes file logs on exit
    // A blank log_dir is reported by validate() below
    let log_dir = config
        .server
        .log_dir
        .as_deref()
        .filter(|dir| !dir.trim().is_empty());
    let _log_guard = init_tracing(&config.server.log_format, log_dir)
        .context("Failed to initialize logging")?;

    info!("☕ Cafetale v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        anyhow::bail!("Invalid configuration: {e}");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        base_path = %config.server.base_path,
        log_dir = ?config.server.log_dir,
        places_base_url = %config.places.base_url,
        "Configuration loaded"
    );

    // Initialize Places adapter
    let adapter = GooglePlacesAdapter::new(&config.places.to_places_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize Places client: {e}"))?;
    let places: Arc<dyn PlaceSearchPort> = Arc::new(adapter);

    // Initialize services
    let cafe_service = CafeService::new(places, config.search_settings());
    let state = AppState::new(cafe_service);

    // Build router with middleware
    let app = routes::create_app(state, &config.server);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
///
/// Once a signal arrives, open connections get `timeout` to drain before
/// the process exits.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        error!("Graceful shutdown timed out, exiting");
        std::process::exit(1);
    });
}
