//! Task API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use task_store::{NewTask, Task, TaskPatch, TaskStore};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Parses a path segment as a task id. A non-numeric segment maps to
/// NotFound, so `/tasks/abc` renders 404 rather than a decode error.
fn parse_task_id(raw: &str) -> ServerResult<u64> {
    raw.parse()
        .map_err(|_| ServerError::NotFound(format!("invalid task id: {raw}")))
}

/// Lists all tasks.
pub async fn list_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.list_tasks().await?;

    Ok(Json(tasks))
}

/// Gets a task by id.
pub async fn get_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Task>> {
    let id = parse_task_id(&id)?;
    let task = state.store.get_task(id).await?;

    Ok(Json(task))
}

/// Creates a new task.
pub async fn create_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<NewTask>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    let task = state.store.create_task(request).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Updates an existing task.
pub async fn update_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(request): Json<TaskPatch>,
) -> ServerResult<Json<Task>> {
    let id = parse_task_id(&id)?;
    let task = state.store.update_task(id, request).await?;

    tracing::info!(task_id = task.id, "Task updated");

    Ok(Json(task))
}

/// Deletes a task.
pub async fn delete_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = parse_task_id(&id)?;
    state.store.delete_task(id).await?;

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;
    use task_store::MemoryTaskStore;

    use super::*;
    use crate::config::Config;

    fn test_state() -> Arc<AppState<MemoryTaskStore>> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "info".to_string(),
        };
        Arc::new(AppState::new(config, MemoryTaskStore::with_sample_tasks()))
    }

    #[tokio::test]
    async fn test_list_returns_sample_tasks() {
        let state = test_state();

        let Json(tasks) = list_tasks(State(state)).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy groceries");
        assert_eq!(tasks[1].title, "Finish homework");
    }

    #[tokio::test]
    async fn test_get_task_by_id() {
        let state = test_state();

        let Json(task) = get_task(State(state), Path("1".to_string())).await.unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy groceries");
    }

    #[tokio::test]
    async fn test_get_missing_task_is_404() {
        let state = test_state();

        let err = get_task(State(state), Path("99".to_string()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_404() {
        let state = test_state();

        let err = get_task(State(state), Path("abc".to_string()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"Task not found"}"#);
    }

    #[tokio::test]
    async fn test_create_task_returns_201() {
        let state = test_state();

        let (status, Json(task)) = create_task(
            State(state.clone()),
            Json(NewTask::titled("Read book")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(task.id, 3);
        assert!(!task.done);

        let Json(tasks) = list_tasks(State(state)).await.unwrap();
        assert_eq!(tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_update_task_applies_patch() {
        let state = test_state();

        let Json(task) = update_task(
            State(state),
            Path("1".to_string()),
            Json(TaskPatch {
                title: None,
                done: Some(true),
            }),
        )
        .await
        .unwrap();

        assert_eq!(task.title, "Buy groceries");
        assert!(task.done);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_404() {
        let state = test_state();

        let err = update_task(
            State(state),
            Path("99".to_string()),
            Json(TaskPatch::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_task_returns_204() {
        let state = test_state();

        let status = delete_task(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = get_task(State(state), Path("2".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
