use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use wpgauge_core::GaugeError;

/// HTTP face of `GaugeError`.
#[derive(Debug)]
pub struct ApiError(pub GaugeError);

impl From<GaugeError> for ApiError {
    fn from(e: GaugeError) -> Self {
        Self(e)
    }
}

impl ApiError {
    /// Status for a domain rejection; `None` for collaborator failures.
    pub fn status(&self) -> Option<StatusCode> {
        if !self.0.is_domain() {
            return None;
        }
        let status = match self.0 {
            GaugeError::NotFound(_) => StatusCode::NOT_FOUND,
            GaugeError::Conflict(_) => StatusCode::CONFLICT,
            GaugeError::AlreadyIncreased(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        };
        Some(status)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Some(status) = self.status() else {
            // Store/config failures are logged only; the caller gets an
            // empty 200, same as a request that did nothing.
            tracing::error!(error = %self.0, "request aborted");
            return StatusCode::OK.into_response();
        };

        tracing::debug!(status = status.as_u16(), error = %self.0, "request rejected");
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
