//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the device store, and metrics.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::store::DeviceStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration, device store, and metrics registry.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Registry of devices, guarded internally.
    pub store: Arc<dyn DeviceStore>,
    /// Prometheus instruments rendered by the metrics listener.
    pub metrics: Metrics,
}
