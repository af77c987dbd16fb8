//! Device collection endpoints: listing and registration.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::{MethodFilter, get};
use axum::Router;
use tracing::{info, warn};

use crate::metrics::MetricsRecorder;
use crate::models::Device;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers the `/devices` collection route.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/devices",
        get(list_devices)
            .post(create_device)
            .on(MethodFilter::HEAD, method_not_allowed)
            .fallback(method_not_allowed),
    )
}

/// Returns every registered device as a JSON array, in insertion order.
async fn list_devices(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let devices = state.store.list().await;
    let body = serde_json::to_vec(&devices)
        .map_err(|e| HTTPError::new(StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], body))
}

/// Registers a new device.
///
/// The body must be a single JSON object; the request `Content-Type` is not
/// checked. No uniqueness check is made on the identifier.
async fn create_device(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, HTTPError> {
    let device = Device::from_json(&body).map_err(|e| {
        warn!("Rejected device registration: {}", e);
        HTTPError::bad_request(e.to_string())
    })?;

    let id = device.id;
    state.store.append(device).await;
    info!(device_id = id, "Device registered");

    if state.config.metrics.live_device_count {
        state
            .metrics
            .set_connected_devices(state.store.len().await);
    }

    Ok((StatusCode::CREATED, "device created"))
}

async fn method_not_allowed() -> HTTPError {
    HTTPError::method_not_allowed("GET, POST")
}
