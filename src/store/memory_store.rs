use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::DeviceStore;
use crate::models::Device;

/// Process-memory device store. Nothing survives a restart.
pub struct MemoryStore {
    devices: RwLock<Vec<Device>>,
}

impl MemoryStore {
    pub fn new(seed: Vec<Device>) -> Self {
        MemoryStore {
            devices: RwLock::new(seed),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Device::seed())
    }
}

#[async_trait]
impl DeviceStore for MemoryStore {
    async fn list(&self) -> Vec<Device> {
        self.devices.read().await.clone()
    }

    async fn append(&self, device: Device) {
        let mut devices = self.devices.write().await;
        debug!("Appending device id={} at position {}", device.id, devices.len());
        devices.push(device);
    }

    async fn update_firmware_by_id(&self, id: i64, firmware: &str) -> usize {
        let mut devices = self.devices.write().await;
        let mut matched = 0;
        for device in devices.iter_mut().filter(|d| d.id == id) {
            device.firmware = firmware.to_string();
            matched += 1;
        }
        matched
    }

    async fn len(&self) -> usize {
        self.devices.read().await.len()
    }
}
