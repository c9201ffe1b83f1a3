use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
///
/// Only two kinds reach clients: not-found (404) and unprocessable (422).
/// The message is a fixed generic string; causes are logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    /// Creates a 404 Not Found error
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Resource not found",
        }
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        tracing::error!(%error, "repository operation failed");
        Self::unprocessable()
    }
}

/// Fallback for routes that do not exist
pub async fn route_not_found() -> ApiError {
    ApiError::not_found()
}
