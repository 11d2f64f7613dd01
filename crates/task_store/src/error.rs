//! Task store error types.

use thiserror::Error;

/// Errors that can occur during task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// No task with the given id.
    #[error("Task not found: {id}")]
    NotFound {
        /// The id that matched nothing.
        id: u64,
    },
}

impl TaskStoreError {
    /// Creates a not found error.
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;
