//! Per-device management endpoints.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{MethodRouter, put};
use axum::Router;
use tracing::{debug, info, warn};

use crate::metrics::MetricsRecorder;
use crate::models::Device;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers every path under the `/devices/` prefix. Anything that is not a
/// single positive id ends up as a 404 from the id parse.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices/", device_methods())
        .route("/devices/*id", device_methods())
}

fn device_methods() -> MethodRouter<AppState> {
    put(upgrade_device).fallback(method_not_allowed)
}

/// Parses the trailing path segment as a device id. Ids start at 1.
fn parse_device_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}

/// Sets the firmware of every device carrying the path id.
///
/// Only the `firmware` field of the body is used. The upgrade is counted and
/// accepted even when no device matches.
async fn upgrade_device(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, HTTPError> {
    let id = match raw_id {
        Ok(Path(raw_id)) => parse_device_id(&raw_id).ok_or_else(|| {
            debug!("Unknown device path segment '{}'", raw_id);
            HTTPError::not_found()
        })?,
        Err(e) => {
            debug!("Unreadable device path: {}", e);
            return Err(HTTPError::not_found());
        }
    };

    let device = Device::from_json(&body).map_err(|e| {
        warn!("Rejected upgrade for device {}: {}", id, e);
        HTTPError::bad_request(e.to_string())
    })?;

    let matched = state
        .store
        .update_firmware_by_id(id, &device.firmware)
        .await;
    info!(
        device_id = id,
        matched,
        firmware = %device.firmware,
        "Device upgrade accepted"
    );

    state
        .metrics
        .record_device_upgrade(&state.config.metrics.upgrade_type);

    Ok((StatusCode::ACCEPTED, "Upgrading..."))
}

async fn method_not_allowed() -> HTTPError {
    HTTPError::method_not_allowed("PUT")
}
