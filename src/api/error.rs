//! Error types for the HTTP layer.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Error type for API request handling.
///
/// The core never fails for "not found"; this layer is where an empty
/// single-record lookup becomes a caller-visible 404.
#[derive(Debug)]
pub enum ApiError {
    /// No pet holds this id.
    PetNotFound(u64),
    /// The store failed underneath the handler.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::PetNotFound(id) => write!(f, "pet {} not found", id),
            ApiError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            ApiError::PetNotFound(_) => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::PetNotFound(_) => 404,
            ApiError::Store(_) => 500,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
