//! Task store trait definitions.

use async_trait::async_trait;

use crate::{NewTask, Task, TaskPatch, TaskStoreResult};

/// Trait for task storage operations.
///
/// Implementations own their records exclusively: every method returns
/// copies, so callers never hold a live reference into the collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists all tasks in creation order.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Gets a task by id.
    async fn get_task(&self, id: u64) -> TaskStoreResult<Task>;

    /// Creates a new task and returns it with its assigned id.
    async fn create_task(&self, new: NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial update to a task and returns the updated record.
    async fn update_task(&self, id: u64, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Deletes a task by id.
    async fn delete_task(&self, id: u64) -> TaskStoreResult<()>;
}
