//! # journey-server
//!
//! Read-only data service for the journey dashboard.
//!
//! This binary provides:
//! - **`GET /api/journey`** returning the journey fixture as JSON, read
//!   from disk on every request
//! - **`GET /health`** for liveness checks
//!
//! CORS is open so a dashboard served from another origin can fetch.

mod api;
mod config;
mod error;
mod fixture;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,journey_server=debug")),
        )
        .init();

    info!("Starting journey server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    if !config.data_path.exists() {
        tracing::warn!(
            path = %config.data_path.display(),
            "Journey fixture not found; /api/journey will answer 404 until it is generated"
        );
    }

    let http_addr = config.http_addr;
    let app_state = AppState::new(config);

    // -----------------------------------------------------------------------
    // 3. Run the HTTP API server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
