//! HTTP Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub static_dir: String,
    pub bundle_present: bool,
}

/// Health check for the static host itself (not the payment backend)
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        static_dir: state.static_dir.display().to_string(),
        bundle_present: state.static_dir.join("index.html").is_file(),
    })
}
