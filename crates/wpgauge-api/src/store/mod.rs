//! Gauge persistence boundary.
//!
//! A store loads and saves the whole collection at once. It knows nothing
//! about names or uniqueness; that is the service's job.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use wpgauge_core::{GaugeData, Result};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait GaugeStore: Send + Sync {
    async fn load(&self) -> Result<GaugeData>;
    async fn save(&self, data: &GaugeData) -> Result<()>;
}
