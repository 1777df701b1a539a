//! Increase and decay transitions.
//!
//! These are pure functions of a gauge, the rules, and an instant. Loading and
//! saving is left to the caller.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::clock::{format_stamp, is_today};
use crate::error::{GaugeError, Result};
use crate::model::Gauge;

/// Compiled gauge settings. Built once from config, then shared read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeRules {
    pub timezone: Tz,
    pub max_value: i64,
    pub increase_step: i64,
    pub decrease_step: i64,
}

impl GaugeRules {
    /// Current instant as a stored timestamp.
    pub fn stamp(&self, now: DateTime<Utc>) -> String {
        format_stamp(now, self.timezone)
    }

    pub fn is_today(&self, stamp: &str, now: DateTime<Utc>) -> bool {
        is_today(stamp, self.timezone, now)
    }
}

/// Outcome of one decay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub decayed: usize,
    pub skipped: usize,
}

impl Gauge {
    /// Daily increase. Rejected if the gauge was already increased today.
    ///
    /// A gauge sitting exactly at `max_value` only gets its timestamp
    /// refreshed. Anything below is bumped by the full step, so a large step
    /// can carry the value past `max_value`.
    pub fn increase(&mut self, rules: &GaugeRules, now: DateTime<Utc>) -> Result<()> {
        if rules.is_today(&self.last_increase, now) {
            return Err(GaugeError::AlreadyIncreased(self.name.clone()));
        }

        self.last_increase = rules.stamp(now);

        if self.value == rules.max_value {
            return Ok(());
        }
        self.value = self.value.saturating_add(rules.increase_step);
        Ok(())
    }

    /// Decay step. Returns false (and leaves the gauge alone) when it was
    /// increased today. Never goes below zero; the timestamp is untouched.
    pub fn decay(&mut self, rules: &GaugeRules, now: DateTime<Utc>) -> bool {
        if rules.is_today(&self.last_increase, now) {
            return false;
        }
        self.value = self.value.saturating_sub(rules.decrease_step).max(0);
        true
    }
}

/// Apply one decay step to every gauge.
pub fn daily_cycle(gauges: &mut [Gauge], rules: &GaugeRules, now: DateTime<Utc>) -> CycleReport {
    let mut report = CycleReport::default();
    for g in gauges.iter_mut() {
        if g.decay(rules, now) {
            report.decayed += 1;
        } else {
            report.skipped += 1;
        }
    }
    report
}
