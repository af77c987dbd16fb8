//! Application startup and server initialization.
//!
//! This module builds the shared state (seeded store, registered metrics with
//! their startup values) and runs the device API and metrics listeners side by
//! side.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::metrics::{Metrics, MetricsRecorder};
use crate::routes;
use crate::state::AppState;
use crate::store::create_store;

pub type StartupError = Box<dyn std::error::Error + Send + Sync>;

/// Creates the seeded store and the metrics registry.
///
/// The connected devices gauge is set once, from the seeded store size, and
/// the info gauge is set for the configured application version.
pub async fn build_state(config: Arc<ConfigV1>) -> Result<AppState, StartupError> {
    let store = create_store(&config.store);
    let metrics = Metrics::new(&config.metrics.namespace)
        .map_err(|e| format!("Failed to register metrics: {}", e))?;

    metrics.set_connected_devices(store.len().await);
    metrics.set_info(&config.app_version);

    Ok(AppState {
        config,
        store,
        metrics,
    })
}

/// Initializes and runs the application servers.
///
/// # Errors
///
/// Returns an error if either listener cannot bind to its configured address,
/// or as soon as one of them stops serving. The other listener is not shut
/// down; the caller is expected to terminate the process.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), StartupError> {
    let state = build_state(config.clone()).await?;

    let devices_listener = TcpListener::bind(&config.devices_bind_address)
        .await
        .map_err(|e| format!("Could not bind to {}: {}", config.devices_bind_address, e))?;
    let metrics_listener = TcpListener::bind(&config.metrics_bind_address)
        .await
        .map_err(|e| format!("Could not bind to {}: {}", config.metrics_bind_address, e))?;

    serve(state, devices_listener, metrics_listener).await
}

/// Serves both routers on already bound listeners, each on its own task.
///
/// Only returns when one listener stops, always with an error.
pub async fn serve(
    state: AppState,
    devices_listener: TcpListener,
    metrics_listener: TcpListener,
) -> Result<(), StartupError> {
    info!("devices listening on {}", devices_listener.local_addr()?);
    info!("metrics listening on {}", metrics_listener.local_addr()?);

    let devices_app = routes::create_router(state.clone());
    let metrics_app = routes::create_metrics_router(state);

    let devices = tokio::spawn(async move { axum::serve(devices_listener, devices_app).await });
    let metrics = tokio::spawn(async move { axum::serve(metrics_listener, metrics_app).await });

    let (name, outcome) = tokio::select! {
        res = devices => ("devices", res),
        res = metrics => ("metrics", res),
    };

    let message = match outcome {
        Ok(Ok(())) => format!("{} listener stopped", name),
        Ok(Err(e)) => format!("{} listener failed: {}", name, e),
        Err(e) => format!("{} listener task aborted: {}", name, e),
    };
    Err(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Device;

    #[tokio::test]
    async fn test_build_state_snapshots_metrics() {
        let state = build_state(Arc::new(ConfigV1::default())).await.unwrap();

        let text = state.metrics.render().unwrap();
        assert!(text.contains("myapp_connected_devices 2"));
        assert!(text.contains("myapp_info{version=\"2.10.5\"} 1"));
        assert_eq!(state.store.list().await, Device::seed());
    }

    #[tokio::test]
    async fn test_build_state_uses_configured_seed() {
        let mut config = ConfigV1::default();
        config.store.seed_devices = vec![Device::new(9, "m", "f")];
        config.app_version = "0.0.1".to_string();

        let state = build_state(Arc::new(config)).await.unwrap();

        let text = state.metrics.render().unwrap();
        assert!(text.contains("myapp_connected_devices 1"));
        assert!(text.contains("myapp_info{version=\"0.0.1\"} 1"));
    }

    #[tokio::test]
    async fn test_run_fails_when_address_is_taken() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ConfigV1::default();
        config.devices_bind_address = "127.0.0.1:0".to_string();
        config.metrics_bind_address = occupied.local_addr().unwrap().to_string();

        let result = run(Arc::new(config)).await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Could not bind"));
    }
}
