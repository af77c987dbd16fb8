pub mod base;
pub mod memory_store;

// Re-export the primary Store items so code outside can do
// "use crate::store::{DeviceStore, create_store};"
pub use base::{DeviceStore, create_store};
pub use memory_store::MemoryStore;
