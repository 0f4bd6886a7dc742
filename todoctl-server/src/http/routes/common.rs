//! Shared response envelope for the demo endpoints.

use serde::Serialize;

/// `{result, results?}` envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(results: T) -> Self {
        Self {
            result: true,
            results: Some(results),
        }
    }
}
