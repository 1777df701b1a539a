//! Persisted gauge data.
//!
//! Field names match the on-disk JSON (`lastIncrease` is camelCase). The
//! timestamp is kept as the raw string so that a load/save cycle without
//! mutation writes back exactly what was read.

use serde::{Deserialize, Serialize};

/// A named counter with a daily increment gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    pub name: String,
    pub value: i64,
    /// RFC3339 timestamp of the last successful increase.
    #[serde(rename = "lastIncrease")]
    pub last_increase: String,
}

impl Gauge {
    /// Fresh gauge at zero, stamped with `last_increase`.
    pub fn new(name: impl Into<String>, last_increase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0,
            last_increase: last_increase.into(),
        }
    }
}

/// The whole persisted collection. Loaded and saved as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeData {
    #[serde(default)]
    pub gauges: Vec<Gauge>,
}

impl GaugeData {
    pub fn new(gauges: Vec<Gauge>) -> Self {
        Self { gauges }
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
