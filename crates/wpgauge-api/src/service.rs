//! Gauge operations over a store.
//!
//! Every operation reloads the full collection and writes it back in full.
//! Name validation failures abort before any write. Other rejections
//! (conflict, not found, already increased) still write back the collection
//! unchanged. Lookups are linear scans, O(n) per operation.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use wpgauge_core::clock::Clock;
use wpgauge_core::error::{GaugeError, Result};
use wpgauge_core::name::{find_gauge, validate_name};
use wpgauge_core::rules::daily_cycle;
use wpgauge_core::{CycleReport, Gauge, GaugeData, GaugeRules};

use crate::store::GaugeStore;

#[derive(Debug, Clone, Copy)]
pub struct ServiceOptions {
    /// Hold a lock across load/mutate/save. Without it concurrent requests
    /// race and the last write wins.
    pub serialize_writes: bool,
    /// Abort the daily cycle on load failure instead of saving an empty
    /// collection.
    pub strict_daily_cycle: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            serialize_writes: true,
            strict_daily_cycle: false,
        }
    }
}

pub struct GaugeService {
    store: Arc<dyn GaugeStore>,
    rules: GaugeRules,
    clock: Arc<dyn Clock>,
    write_lock: Option<Mutex<()>>,
    strict_daily_cycle: bool,
}

impl GaugeService {
    pub fn new(
        store: Arc<dyn GaugeStore>,
        rules: GaugeRules,
        clock: Arc<dyn Clock>,
        opts: ServiceOptions,
    ) -> Self {
        Self {
            store,
            rules,
            clock,
            write_lock: opts.serialize_writes.then(|| Mutex::new(())),
            strict_daily_cycle: opts.strict_daily_cycle,
        }
    }

    pub fn rules(&self) -> &GaugeRules {
        &self.rules
    }

    async fn exclusive(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_lock {
            Some(m) => Some(m.lock().await),
            None => None,
        }
    }

    /// Save `data`, then report `outcome`. A rejection wins over a failed
    /// save; the save error only surfaces when the operation succeeded.
    async fn write_back(&self, data: &GaugeData, outcome: Result<()>) -> Result<()> {
        match (self.store.save(data).await, outcome) {
            (Ok(()), outcome) => outcome,
            (Err(save_err), Err(rejected)) if rejected.is_domain() => {
                tracing::warn!(error = %save_err, rejected = %rejected, "write-back after rejection failed");
                Err(rejected)
            }
            (Err(save_err), _) => Err(save_err),
        }
    }

    pub async fn get_all(&self) -> Result<GaugeData> {
        self.store.load().await
    }

    pub async fn add_gauge(&self, name: &str) -> Result<()> {
        let _guard = self.exclusive().await;
        let mut data = self.store.load().await?;
        validate_name(name)?;

        let outcome = match find_gauge(&data.gauges, name) {
            Some(_) => Err(GaugeError::Conflict(name.to_string())),
            None => {
                data.gauges
                    .push(Gauge::new(name, self.rules.stamp(self.clock.now())));
                tracing::info!(gauge = %name, "gauge added");
                Ok(())
            }
        };

        self.write_back(&data, outcome).await
    }

    pub async fn remove_gauge(&self, name: &str) -> Result<()> {
        let _guard = self.exclusive().await;
        let mut data = self.store.load().await?;
        validate_name(name)?;

        let outcome = match find_gauge(&data.gauges, name) {
            Some(i) => {
                data.gauges.remove(i);
                tracing::info!(gauge = %name, "gauge removed");
                Ok(())
            }
            None => Err(GaugeError::NotFound(name.to_string())),
        };

        self.write_back(&data, outcome).await
    }

    /// Daily increase of one gauge.
    pub async fn increase_gauge(&self, name: &str) -> Result<()> {
        let _guard = self.exclusive().await;
        let mut data = self.store.load().await?;
        validate_name(name)?;

        let outcome = match find_gauge(&data.gauges, name) {
            Some(i) => {
                let g = &mut data.gauges[i];
                let res = g.increase(&self.rules, self.clock.now());
                if res.is_ok() {
                    tracing::info!(gauge = %name, value = g.value, "gauge increased");
                }
                res
            }
            None => Err(GaugeError::NotFound(name.to_string())),
        };

        self.write_back(&data, outcome).await
    }

    /// Decay every gauge not increased today.
    ///
    /// On load failure the cycle carries on with an empty collection and
    /// saves it, unless `strict_daily_cycle` is set.
    pub async fn daily_cycle(&self) -> Result<CycleReport> {
        let _guard = self.exclusive().await;
        let mut data = match self.store.load().await {
            Ok(data) => data,
            Err(e) if self.strict_daily_cycle => return Err(e),
            Err(e) => {
                tracing::error!(error = %e, "daily cycle load failed, continuing with empty collection");
                GaugeData::default()
            }
        };

        let report = daily_cycle(&mut data.gauges, &self.rules, self.clock.now());
        self.store.save(&data).await?;

        tracing::info!(decayed = report.decayed, skipped = report.skipped, "daily cycle done");
        Ok(report)
    }
}
