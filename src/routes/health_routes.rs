//! Liveness endpoint served next to the metrics.

use crate::state::AppState;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
