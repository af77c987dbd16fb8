//! Metrics recording implementation using Prometheus.

use prometheus::{
    CounterVec, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder,
    register_counter_vec_with_registry, register_gauge_vec_with_registry,
    register_gauge_with_registry,
};
use std::sync::Arc;

/// Trait for recording device registry metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Sets the connected devices gauge. The value is never recomputed on its own.
    fn set_connected_devices(&self, count: usize);

    /// Marks `version` as the running application version.
    fn set_info(&self, version: &str);

    /// Records one firmware upgrade for the given device type.
    fn record_device_upgrade(&self, device_type: &str);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    connected_devices: Gauge,
    info: GaugeVec,
    device_upgrade_total: CounterVec,
}

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    ///
    /// Every instrument name is prefixed with `namespace`.
    pub fn new(namespace: &str) -> Result<Self, prometheus::Error> {
        let registry = Arc::new(Registry::new());

        let connected_devices = register_gauge_with_registry!(
            Opts::new(
                "connected_devices",
                "Number of currently connected devices."
            )
            .namespace(namespace),
            registry.clone()
        )?;

        let info = register_gauge_vec_with_registry!(
            Opts::new("info", "Information about the My App environment.").namespace(namespace),
            &["version"],
            registry.clone()
        )?;

        let device_upgrade_total = register_counter_vec_with_registry!(
            Opts::new("device_upgrade_total", "Number of upgraded devices.").namespace(namespace),
            &["type"],
            registry.clone()
        )?;

        Ok(Metrics {
            registry,
            connected_devices,
            info,
            device_upgrade_total,
        })
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| format!("Failed to encode metrics: {}", e))?;
        String::from_utf8(buffer).map_err(|e| format!("Metrics encoding produced invalid UTF-8: {}", e))
    }
}

impl MetricsRecorder for Metrics {
    fn set_connected_devices(&self, count: usize) {
        self.connected_devices.set(count as f64);
    }

    fn set_info(&self, version: &str) {
        self.info.with_label_values(&[version]).set(1.0);
    }

    fn record_device_upgrade(&self, device_type: &str) {
        self.device_upgrade_total
            .with_label_values(&[device_type])
            .inc();
    }
}
