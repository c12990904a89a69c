//! Menu Domain Errors
//!
//! The store raises a single domain error kind (NotFound). It is translated
//! exactly once, at the handler boundary, into a structured `ApiError`
//! response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the item store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// The referenced id has no corresponding item
    #[error("Menu item with id {0} not found")]
    NotFound(u64),
}

/// Structured error payload returned on failure responses
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// When the error response was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,

    /// Numeric HTTP status
    pub status: u16,

    /// Canonical status reason, e.g. "Not Found"
    pub error: String,

    /// Human-readable description of what went wrong
    pub message: String,

    /// Path of the request that failed
    pub path: String,
}

impl ApiError {
    /// Builds the error body for a given status, message and request path
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.into(),
        }
    }

    /// Maps a domain error to its HTTP representation
    pub fn from_menu_error(err: MenuError, path: impl Into<String>) -> Self {
        match err {
            MenuError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string(), path),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
