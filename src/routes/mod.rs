//! HTTP route definitions and handlers.
//!
//! Routes are split across two listeners: the device API (collection and
//! per-device management) and the metrics listener (scrape and health).

mod device_routes;
mod health_routes;
mod manage_routes;
mod metrics;

use crate::state::AppState;
use axum::Router;

/// Creates the device API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(device_routes::routes())
        .merge(manage_routes::routes())
        .with_state(state)
}

/// Creates the router served by the metrics listener.
pub fn create_metrics_router(state: AppState) -> Router {
    Router::new()
        .merge(metrics::routes())
        .merge(health_routes::routes())
        .with_state(state)
}
