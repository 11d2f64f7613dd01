//! In-memory task store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{NewTask, Task, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult};

/// Store contents, guarded by a single lock so each operation runs to
/// completion without interleaving.
#[derive(Debug, Default)]
struct Inner {
    /// Tasks in creation order.
    tasks: Vec<Task>,
    /// Count of tasks ever created. The next id is `created + 1`, so ids
    /// stay monotonic and are never reused after a delete.
    created: u64,
}

/// In-memory task store.
///
/// The collection lives for the lifetime of the store; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryTaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the two sample tasks the server
    /// starts with.
    pub fn with_sample_tasks() -> Self {
        let inner = Inner {
            tasks: vec![
                Task {
                    id: 1,
                    title: "Buy groceries".to_string(),
                    done: false,
                },
                Task {
                    id: 2,
                    title: "Finish homework".to_string(),
                    done: false,
                },
            ],
            created: 2,
        };

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.clone())
    }

    async fn get_task(&self, id: u64) -> TaskStoreResult<Task> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TaskStoreError::NotFound { id })
    }

    async fn create_task(&self, new: NewTask) -> TaskStoreResult<Task> {
        let mut inner = self.inner.write().await;
        inner.created += 1;

        let task = Task {
            id: inner.created,
            title: new.title,
            done: new.done.unwrap_or(false),
        };
        inner.tasks.push(task.clone());

        Ok(task)
    }

    async fn update_task(&self, id: u64, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskStoreError::NotFound { id })?;

        // An empty title is skipped; an explicit `done: false` is applied.
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            task.title = title;
        }
        if let Some(done) = patch.done {
            task.done = done;
        }

        Ok(task.clone())
    }

    async fn delete_task(&self, id: u64) -> TaskStoreResult<()> {
        let mut inner = self.inner.write().await;
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskStoreError::NotFound { id })?;
        inner.tasks.remove(index);

        Ok(())
    }
}
