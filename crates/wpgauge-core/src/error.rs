//! Shared error type across wpgauge crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Gauge name failed validation, or the request was malformed.
    BadRequest,
    /// No gauge with the requested name.
    NotFound,
    /// A gauge with the requested name already exists.
    Conflict,
    /// The gauge was already increased today.
    AlreadyIncreased,
    /// Gauge store failed to load or save.
    Store,
    /// Configuration could not be loaded or is invalid.
    Config,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::AlreadyIncreased => "ALREADY_INCREASED",
            ClientCode::Store => "STORE",
            ClientCode::Config => "CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Unified error type used by core and api.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("invalid gauge name: {0:?}")]
    Validation(String),
    #[error("gauge not found: {0}")]
    NotFound(String),
    #[error("gauge already exists: {0}")]
    Conflict(String),
    #[error("gauge already increased today: {0}")]
    AlreadyIncreased(String),
    #[error("store: {0}")]
    Store(String),
    #[error("config: {0}")]
    Config(String),
}

impl GaugeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GaugeError::Validation(_) => ClientCode::BadRequest,
            GaugeError::NotFound(_) => ClientCode::NotFound,
            GaugeError::Conflict(_) => ClientCode::Conflict,
            GaugeError::AlreadyIncreased(_) => ClientCode::AlreadyIncreased,
            GaugeError::Store(_) => ClientCode::Store,
            GaugeError::Config(_) => ClientCode::Config,
        }
    }

    /// Domain errors are rejections of a single request; collaborator
    /// failures (store/config) are not.
    pub fn is_domain(&self) -> bool {
        !matches!(self, GaugeError::Store(_) | GaugeError::Config(_))
    }
}
