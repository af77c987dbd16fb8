use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// MetricsConfig shapes the exported instruments.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prefix for every metric name, e.g. "myapp" gives "myapp_connected_devices".
    pub namespace: String,
    /// Value of the `type` label attached to every upgrade.
    pub upgrade_type: String,
    /// When true, the connected devices gauge follows the store size after each
    /// creation. When false it stays at the startup snapshot.
    pub live_device_count: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            namespace: "myapp".to_string(),
            upgrade_type: "router".to_string(),
            live_device_count: false,
        }
    }
}
