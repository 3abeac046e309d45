//! Error types for the profile cache
//!
//! `get`/`set` on the cache are total and never produce these. Errors only
//! surface at construction, on shutdown, and at the HTTP edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the profile cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Profile or order is absent (never stored, expired, or removed)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache settings that cannot be honoured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cache was constructed outside of a Tokio runtime
    #[error("No Tokio runtime available to run the expiry collector")]
    NoRuntime,

    /// The expiry collector panicked or was cancelled before it could stop cleanly
    #[error("Expiry collector failed: {0}")]
    CollectorFailed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidConfig(_)
            | CacheError::NoRuntime
            | CacheError::CollectorFailed(_)
            | CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the profile cache.
pub type Result<T> = std::result::Result<T, CacheError>;
