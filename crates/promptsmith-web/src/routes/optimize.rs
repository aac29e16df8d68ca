//! Prompt optimization endpoint

use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Request body for an optimization
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub message: String,
}

/// Displayable optimization outcome
#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub result: String,
    pub kind: String,
    pub success: bool,
}

pub fn optimize_routes() -> Router<AppState> {
    Router::new().route("/api/optimize", post(optimize_handler))
}

/// Always answers 200; failures are part of `result`
async fn optimize_handler(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Json<OptimizeResponse> {
    let outcome = state.optimizer.generate(&request.message).await;
    tracing::info!("Optimization finished: {}", outcome.kind());

    Json(OptimizeResponse {
        result: outcome.to_string(),
        kind: outcome.kind().to_string(),
        success: outcome.is_success(),
    })
}
