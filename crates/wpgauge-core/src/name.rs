//! Gauge name validation and lookup.

use crate::error::{GaugeError, Result};
use crate::model::Gauge;

/// True when every character is an ASCII letter. The empty name passes.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(GaugeError::Validation(name.to_string()))
    }
}

/// Linear scan, first exact (case-sensitive) match wins.
pub fn find_gauge(gauges: &[Gauge], name: &str) -> Option<usize> {
    gauges.iter().position(|g| g.name == name)
}
