use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use wpgauge_core::error::{GaugeError, Result};
use wpgauge_core::GaugeData;

use super::GaugeStore;

/// In-process store. Counts saves and can be told to fail loads or saves,
/// which makes the service's write-back behavior observable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<GaugeData>,
    saves: AtomicU64,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new(data: GaugeData) -> Self {
        Self {
            data: Mutex::new(data),
            ..Self::default()
        }
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    /// Copy of the current contents, bypassing load failure injection.
    pub fn snapshot(&self) -> Result<GaugeData> {
        self.data
            .lock()
            .map(|g| g.clone())
            .map_err(|_| GaugeError::Store("memory store poisoned".into()))
    }
}

#[async_trait]
impl GaugeStore for MemoryStore {
    async fn load(&self) -> Result<GaugeData> {
        if self.fail_loads.load(Ordering::Relaxed) {
            return Err(GaugeError::Store("memory store load failure".into()));
        }
        self.snapshot()
    }

    async fn save(&self, data: &GaugeData) -> Result<()> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(GaugeError::Store("memory store save failure".into()));
        }
        let mut g = self
            .data
            .lock()
            .map_err(|_| GaugeError::Store("memory store poisoned".into()))?;
        *g = data.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
