//! HTTP API v1 — the dashboard's data endpoints.
//!
//! Endpoints:
//!
//! - `GET  /v1/layout`                — Options, slider, bindings and first figures
//! - `GET  /v1/charts/proportion`     — Proportion figure for `?site=`
//! - `GET  /v1/charts/correlation`    — Correlation figure for `?site=&low=&high=`
//! - `POST /v1/update`                — Apply one input change, get replaced figures
//! - `GET  /v1/status`                — Dataset and uptime summary

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use launchboard_core::{
    BINDINGS, Binding, Controller, Figure, FigureUpdate, FilterState, InputChange, Interaction,
    OutputId, PayloadBounds, PayloadRange, SiteOption, SiteSelection,
};

use crate::SharedState;

pub type SharedApiState = SharedState;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/layout", get(layout_handler))
        .route("/charts/proportion", get(proportion_handler))
        .route("/charts/correlation", get(correlation_handler))
        .route("/update", post(update_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Serialize)]
struct LayoutResponse {
    title: String,
    options: Vec<SiteOption>,
    bounds: PayloadBounds,
    slider: SliderDto,
    initial_state: FilterState,
    bindings: Vec<Binding>,
    figures: Vec<FigureUpdate>,
}

#[derive(Serialize, Deserialize)]
struct SliderDto {
    min: f64,
    max: f64,
    step: f64,
    marks: Vec<f64>,
}

#[derive(Deserialize)]
struct ProportionQuery {
    #[serde(default)]
    site: Option<String>,
}

#[derive(Deserialize)]
struct CorrelationQuery {
    #[serde(default)]
    site: Option<String>,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
}

#[derive(Deserialize)]
struct UpdateRequest {
    /// Input values as the page held them before this interaction.
    state: FilterState,
    /// The input that just changed and its new value.
    change: InputChange,
}

#[derive(Serialize, Deserialize)]
struct StatusResponse {
    version: String,
    dataset: String,
    records: usize,
    sites: usize,
    min_payload: f64,
    max_payload: f64,
    uptime_secs: i64,
}

fn selection(site: Option<String>) -> SiteSelection {
    site.map(SiteSelection::from).unwrap_or_default()
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn layout_handler(State(state): State<SharedApiState>) -> Json<LayoutResponse> {
    let context = &state.context;
    let controller = Controller::new(context);
    let initial_state = controller.initial_state();
    let figures = controller.render_all(&initial_state);

    let step = state.config.slider.step;
    let domain = context.bounds().snapped(step);

    Json(LayoutResponse {
        title: state.config.dashboard.title.clone(),
        options: context.options().to_vec(),
        bounds: context.bounds(),
        slider: SliderDto {
            min: domain.min,
            max: domain.max,
            step,
            marks: domain.marks(step),
        },
        initial_state,
        bindings: BINDINGS.to_vec(),
        figures,
    })
}

async fn proportion_handler(
    State(state): State<SharedApiState>,
    Query(query): Query<ProportionQuery>,
) -> Json<Figure> {
    let controller = Controller::new(&state.context);
    let filter = FilterState {
        site: selection(query.site),
        ..controller.initial_state()
    };
    Json(controller.evaluate(OutputId::ProportionChart, &filter))
}

async fn correlation_handler(
    State(state): State<SharedApiState>,
    Query(query): Query<CorrelationQuery>,
) -> Json<Figure> {
    let bounds = state.context.bounds();
    let filter = FilterState {
        site: selection(query.site),
        payload: PayloadRange::new(
            query.low.unwrap_or(bounds.min),
            query.high.unwrap_or(bounds.max),
        ),
    };
    let controller = Controller::new(&state.context);
    Json(controller.evaluate(OutputId::CorrelationChart, &filter))
}

async fn update_handler(
    State(state): State<SharedApiState>,
    Json(request): Json<UpdateRequest>,
) -> Json<Interaction> {
    debug!(change = ?request.change, "Update requested");
    let controller = Controller::new(&state.context);
    Json(controller.handle(&request.state, request.change))
}

async fn status_handler(State(state): State<SharedApiState>) -> Json<StatusResponse> {
    let bounds = state.context.bounds();
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").into(),
        dataset: state.config.dataset.path.display().to_string(),
        records: state.context.records().len(),
        sites: state.context.site_count(),
        min_payload: bounds.min,
        max_payload: bounds.max,
        uptime_secs: (chrono::Utc::now() - state.start_time).num_seconds(),
    })
}
