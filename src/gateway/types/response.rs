//! Error response body and the boundary error type
//!
//! Every failed request answers with the same shape:
//! `{ "timestamp": "...", "message": "...", "path": "/reservation/7" }`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::reservation::ReservationError;

/// Uniform error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetails {
    /// When the error was produced (UTC)
    pub timestamp: DateTime<Utc>,
    /// Human-readable description
    #[schema(example = "Reservation 1 does not exist")]
    pub message: String,
    /// Request path that failed
    #[schema(example = "/reservation/1")]
    pub path: String,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            path: path.into(),
        }
    }
}

/// A [`ReservationError`] bound to the request path it happened on
#[derive(Debug)]
pub struct ApiError {
    pub error: ReservationError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: ReservationError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.error {
            ReservationError::Internal(source) => {
                tracing::error!(path = %self.path, error = %source, "Request failed");
            }
            other => {
                tracing::warn!(path = %self.path, status = status.as_u16(), "{}", other);
            }
        }
        let body = ErrorDetails::new(self.error.to_string(), self.path);
        (status, Json(body)).into_response()
    }
}

/// Attach a request path to endpoint errors
pub trait AtPath<T> {
    fn at(self, path: &str) -> Result<T, ApiError>;
}

impl<T> AtPath<T> for Result<T, ReservationError> {
    fn at(self, path: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, path))
    }
}
