use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a model credential is configured (ranking step active).
    pub ranking_enabled: bool,
    /// Whether search credentials are configured.
    pub search_configured: bool,
}

/// GET /health -- reports service status and degraded capabilities.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let search_configured =
        state.config.google_cse_key.is_some() && state.config.google_cx.is_some();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ranking_enabled: state.ranker.is_some(),
        search_configured,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
