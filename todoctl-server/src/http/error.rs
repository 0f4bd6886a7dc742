//! API error types with IntoResponse.
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Response bodies stay constant per error class; the specific cause is
//! logged server-side, never leaked to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::todo::{ServiceError, ValidationError};

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (400)
    InsufficientParams(ValidationError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InsufficientParams(e) => {
                tracing::debug!("request rejected: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "result": false,
                        "error": "insufficient parameters"
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "result": false,
                        "error": "internal server error"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::InsufficientParams(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(e) => Self::InsufficientParams(e),
            ServiceError::Db(e) => Self::Database(e),
        }
    }
}
