//! Random-string demo endpoint.

use axum::{routing::post, Json, Router};
use serde::Serialize;
use todoctl_core::util::random_characters;

use super::common::ApiResponse;

/// Random payload
#[derive(Serialize)]
pub struct RandomResults {
    pub random: String,
}

/// POST /api/random - fresh random string per call
async fn random() -> Json<ApiResponse<RandomResults>> {
    Json(ApiResponse::ok(RandomResults {
        random: random_characters(),
    }))
}

/// Random routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/random", post(random))
}
