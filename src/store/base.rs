use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::memory_store::MemoryStore;
use crate::config::StoreConfig;
use crate::models::Device;

/// The DeviceStore trait abstracts the ordered device registry.
///
/// Identifiers are not required to be unique. Every operation succeeds.
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Returns every stored device in insertion order.
    async fn list(&self) -> Vec<Device>;

    /// Adds a device at the end, whatever its fields contain.
    async fn append(&self, device: Device);

    /// Overwrites the firmware of every device whose id equals `id`.
    ///
    /// Returns how many records matched; zero matches is not an error.
    async fn update_firmware_by_id(&self, id: i64, firmware: &str) -> usize;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Creates the device store, seeded with the configured devices.
pub fn create_store(config: &StoreConfig) -> Arc<dyn DeviceStore> {
    info!(
        "Creating in-memory device store with {} seed devices.",
        config.seed_devices.len()
    );
    Arc::new(MemoryStore::new(config.seed_devices.clone()))
}
