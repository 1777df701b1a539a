//! Gauge HTTP surface (handlers, request binding, error mapping).

pub mod error;
pub mod extract;
pub mod handlers;

pub use error::ApiError;
