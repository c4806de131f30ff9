//! Health and metrics handlers.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::http::responses::HealthResponse;
use crate::state::AppState;

/// Plain-text banner at the server root.
pub async fn root() -> &'static str {
    "Hello from api-server"
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        messages: state.message_count(),
    })
}

/// Prometheus metrics endpoint.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = crate::metrics::collect_metrics(&state);
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
