//! Readiness endpoint

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Readiness report, both structured and as rendered markdown
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub overall: String,
    pub overall_label: String,
    pub api: String,
    pub prompt: String,
    pub checked_at: String,
    pub report: String,
}

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/api/status", get(status_handler))
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let report = state.reporter.report().await;

    Json(StatusResponse {
        overall: report.overall.as_str().to_string(),
        overall_label: report.overall.to_string(),
        api: report.api.to_string(),
        prompt: report.prompt_line(),
        checked_at: report.timestamp(),
        report: report.to_string(),
    })
}
