//! Relay error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body returned to callers for every relay failure
pub const GENERIC_ERROR_BODY: &str = "Error fetching crypto data";

/// Failures while fetching or reshaping upstream prices
#[derive(Debug, Error)]
pub enum RelayError {
    /// Network error, timeout or unreadable body
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
    /// Upstream body is not the expected shape
    #[error("Malformed upstream payload: {0}")]
    Malformed(String),
}

impl IntoResponse for RelayError {
    /// Every cause collapses to the same 500; the detail stays in the logs
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error fetching crypto data");
        (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response()
    }
}
