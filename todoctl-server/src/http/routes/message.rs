//! Fixed-message demo endpoint.

use axum::{routing::post, Json, Router};
use serde::Serialize;

use super::common::ApiResponse;

/// The canned first-API payload.
pub const FIRST_API_MESSAGE: &str = "This is your first API";

/// Message payload
#[derive(Serialize)]
pub struct MessageResults {
    pub message: &'static str,
}

/// POST /api/message - always answers with the canned message
async fn message() -> Json<ApiResponse<MessageResults>> {
    Json(ApiResponse::ok(MessageResults {
        message: FIRST_API_MESSAGE,
    }))
}

/// Message routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/message", post(message))
}
