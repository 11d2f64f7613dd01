//! Entity types for the task store

use serde::{Deserialize, Serialize};

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store at creation time. Immutable
    /// thereafter.
    pub id: u64,
    /// Task title.
    pub title: String,
    /// Whether the task is completed.
    pub done: bool,
}

/// Payload for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    /// Task title. Required; not checked for emptiness.
    pub title: String,
    /// Completion flag. Defaults to `false` when omitted.
    pub done: Option<bool>,
}

/// Partial update for a task.
///
/// The two fields follow different skip rules, and callers rely on the
/// difference: an empty `title` is ignored, while `done: false` is applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    /// New title. `None` or an empty string keeps the existing title.
    pub title: Option<String>,
    /// New completion flag. `None` keeps the existing value; `Some(false)`
    /// is applied.
    pub done: Option<bool>,
}

impl NewTask {
    /// Creates a creation payload with the given title and the default
    /// completion flag.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: None,
        }
    }
}
