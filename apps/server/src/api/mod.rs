//! API endpoints.

pub mod task;

use std::sync::Arc;

use axum::{Router, routing::get};
use task_store::TaskStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TaskStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Task collection endpoints
        .route("/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/tasks/:id",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
