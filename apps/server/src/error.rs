//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use task_store::TaskStoreError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Resource not found. Carries a description for logs; the response
    /// body is fixed by the API contract.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store error.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "Task not found"),
            ServerError::Store(TaskStoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Task not found")
            }
        };

        let body = json!({ "message": message });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
