//! Shared fixtures: memory store, frozen clock, Berlin rules.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use wpgauge_api::service::{GaugeService, ServiceOptions};
use wpgauge_api::store::MemoryStore;
use wpgauge_core::clock::FixedClock;
use wpgauge_core::{Gauge, GaugeData, GaugeRules};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
}

pub fn rules() -> GaugeRules {
    GaugeRules {
        timezone: chrono_tz::Europe::Berlin,
        max_value: 10,
        increase_step: 1,
        decrease_step: 4,
    }
}

/// Stored stamp for `days` before the fixed now.
pub fn days_ago(days: i64) -> String {
    rules().stamp(now() - Duration::days(days))
}

pub fn gauge(name: &str, value: i64, last_increase: String) -> Gauge {
    Gauge {
        name: name.into(),
        value,
        last_increase,
    }
}

pub fn service_with(
    gauges: Vec<Gauge>,
    rules: GaugeRules,
    opts: ServiceOptions,
) -> (GaugeService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(GaugeData::new(gauges)));
    let svc = GaugeService::new(store.clone(), rules, Arc::new(FixedClock(now())), opts);
    (svc, store)
}

pub fn service(gauges: Vec<Gauge>) -> (GaugeService, Arc<MemoryStore>) {
    service_with(gauges, rules(), ServiceOptions::default())
}

pub const CONFIG_YAML: &str = r#"
version: 1
gauges:
  timezone: "Europe/Berlin"
  max_value: 10
  increase_step: 1
  decrease_step: 4
"#;
