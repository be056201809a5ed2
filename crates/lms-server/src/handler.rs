use axum::extract::State;
use axum::response::{Html, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: state.uptime_secs(),
    })
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "lms-server",
        "version": env!("CARGO_PKG_VERSION"),
        "book_count": state.books.book_count(),
    }))
}

/// Serves the single-page front end.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
