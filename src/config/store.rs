use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Device;

/// The device store configuration.
/// - seed_devices: the records the store holds when the process starts.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct StoreConfig {
    #[serde(default = "Device::seed")]
    pub seed_devices: Vec<Device>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            seed_devices: Device::seed(),
        }
    }
}
