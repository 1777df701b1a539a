//! Observability: log setup and in-process metrics.

pub mod logging;
pub mod metrics;

pub use metrics::ServiceMetrics;
