use std::sync::Arc;

use axum::{extract::State, http::Method, routing::get, Json, Router};
use journey_shared::constants::{HEALTH_ROUTE, JOURNEY_ROUTE};
use journey_shared::JourneyDocument;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::fixture::JourneyFixture;

#[derive(Clone)]
pub struct AppState {
    pub fixture: Arc<JourneyFixture>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            fixture: Arc::new(JourneyFixture::new(config.data_path.clone())),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route(HEALTH_ROUTE, get(health_check))
        .route(JOURNEY_ROUTE, get(get_journey))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    name: String,
    version: &'static str,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: state.config.instance_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn get_journey(State(state): State<AppState>) -> Result<Json<JourneyDocument>, ServerError> {
    match state.fixture.load().await {
        Ok(document) => Ok(Json(document)),
        Err(e) => {
            warn!(
                path = %state.fixture.path().display(),
                error = %e,
                "Failed to serve journey data"
            );
            Err(e.into())
        }
    }
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
