//! HTTP gateway for Launchboard.
//!
//! Serves the embedded dashboard page, a health check, and the v1 API the
//! page calls whenever the site selector or payload slider changes.
//!
//! Built on Axum. The dataset context is immutable after startup, so the
//! shared state is a plain `Arc` with no locks.

pub mod api_v1;
pub mod frontend;

use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use launchboard_config::AppConfig;
use launchboard_core::DashboardContext;

/// Shared application state for the gateway.
pub struct DashboardState {
    pub config: AppConfig,
    pub context: DashboardContext,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl DashboardState {
    pub fn new(config: AppConfig, context: DashboardContext) -> Self {
        Self {
            config,
            context,
            start_time: chrono::Utc::now(),
        }
    }
}

pub type SharedState = Arc<DashboardState>;

/// Build the full router: frontend, health check, and `/v1`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(state))
        .merge(frontend::frontend_router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Serve an already loaded context until the process is terminated.
///
/// Loading happens before this is called, so a bad dataset never binds a port.
pub async fn serve(
    config: AppConfig,
    context: DashboardContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr();
    let state = Arc::new(DashboardState::new(config, context));
    let app = build_router(state);

    info!(addr = %addr, "Dashboard gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
