//! wpgauge API library entry.
//!
//! Wires config, the gauge store, `GaugeService` and the axum router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
pub mod service;
pub mod store;
