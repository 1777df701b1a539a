//! Top-level facade crate for wpgauge.
//!
//! Re-exports the domain core and the API library so users can depend on a single crate.

pub mod core {
    pub use wpgauge_core::*;
}

pub mod api {
    pub use wpgauge_api::*;
}
