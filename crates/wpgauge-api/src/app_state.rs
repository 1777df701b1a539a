//! Shared application state for the gauge API.
//!
//! Config is compiled once into `GaugeRules` and handed to the service;
//! nothing reads config through a global afterwards.

use std::sync::Arc;

use wpgauge_core::clock::{Clock, SystemClock};
use wpgauge_core::error::Result;

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;
use crate::service::{GaugeService, ServiceOptions};
use crate::store::{GaugeStore, JsonFileStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    service: Arc<GaugeService>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: ServiceConfig,
}

impl AppState {
    /// Production wiring: JSON file store at `store.path`, system clock.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(&cfg.store.path));
        tracing::info!(path = %store.path().display(), "using json file store");
        Self::from_parts(cfg, store, Arc::new(SystemClock))
    }

    pub fn from_parts(
        cfg: ServiceConfig,
        store: Arc<dyn GaugeStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let rules = cfg.gauges.rules()?;
        let opts = ServiceOptions {
            serialize_writes: cfg.store.serialize_writes,
            strict_daily_cycle: cfg.gauges.strict_daily_cycle,
        };
        tracing::info!(
            timezone = %rules.timezone,
            max_value = rules.max_value,
            increase_step = rules.increase_step,
            decrease_step = rules.decrease_step,
            serialize_writes = opts.serialize_writes,
            "gauge rules loaded"
        );

        let service = GaugeService::new(store, rules, clock, opts);

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            service: Arc::new(service),
            metrics: Arc::new(ServiceMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn service(&self) -> &GaugeService {
        &self.service
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }
}
