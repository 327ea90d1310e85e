//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::TaskStatus;

/// A tracked task.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Primary key.
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Free-form description (optional).
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Title.
    pub title: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
}

/// Full replacement of a task's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// New title.
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: TaskStatus,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New title, if provided.
    pub title: Option<String>,
    /// New description, if provided.
    pub description: Option<String>,
    /// New status, if provided.
    pub status: Option<TaskStatus>,
}
