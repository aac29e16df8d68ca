//! Page metadata: header text and example questions

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

/// Questions offered as one-click examples
pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "Are there programming languages that only have recursion and no loops?",
    "Who earns more money, a data scientist or a full-stack developer?",
    "How to learn programming effectively?",
    "What are the best practices for API design?",
    "Explain machine learning to a beginner",
];

pub fn info_routes() -> Router<AppState> {
    Router::new().route("/api/info", get(info_handler))
}

async fn info_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "title": state.ui.title,
        "description": state.ui.description,
        "examples": EXAMPLE_QUESTIONS,
        "prompt_file": state.optimizer.prompt_source().file_name(),
    }))
}
