//! wpgauge core: gauge model, name rules, day comparator and transitions.
//!
//! Everything here is transport-agnostic and free of I/O. The api crate loads
//! the collection, applies these functions, and writes it back.
//!
//! Panics, `unwrap`, and `expect` are compile-denied outside tests; fallible
//! paths surface as `GaugeError`.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod clock;
pub mod error;
pub mod model;
pub mod name;
pub mod rules;

/// Shared result type.
pub use error::{ClientCode, GaugeError, Result};
pub use model::{Gauge, GaugeData};
pub use rules::{CycleReport, GaugeRules};
