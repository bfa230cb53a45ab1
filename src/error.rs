//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the catalog service and its cache layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A nil/zero key was passed to a cache write
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// Product not found in the backing store
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // A nil-key put is a caller bug, not a client error
            CacheError::InvalidKey(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CacheError>;
