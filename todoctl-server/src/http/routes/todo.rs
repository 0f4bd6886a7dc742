//! Todo endpoint.
//!
//! One POST route carrying the operation in the body, dispatched by the
//! todo service.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::todo::{TodoRequest, TodoResponse};

/// POST /api/todo - run one todo operation
async fn handle_todo(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let response = state.todos.handle(&request).await?;
    Ok(Json(response))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/todo", post(handle_todo))
}
