//! Metrics exposition endpoint.

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::error;

/// Creates the metrics route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}

/// Handler for the /metrics endpoint.
///
/// Returns all collected metrics in Prometheus text format. Reading the
/// instruments has no side effects.
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let metrics_text = state.metrics.render().map_err(|e| {
        error!("{}", e);
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
        metrics_text,
    ))
}
