//! Task-related domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of mutation that produced a [`TaskEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskEventKind {
    /// A task was created.
    TaskCreated,
    /// A task was fully replaced.
    TaskUpdated,
    /// A task was partially updated.
    TaskPatched,
    /// A task was deleted.
    TaskDeleted,
}

/// Event payload published to the queue after a task mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvent {
    /// What happened.
    pub event_type: TaskEventKind,
    /// The task's primary key.
    pub id: i64,
    /// Task title at the time of the event.
    pub title: String,
    /// Task description at the time of the event.
    pub description: Option<String>,
    /// Task status name at the time of the event.
    pub status: String,
    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,
}

impl TaskEvent {
    /// Create an event stamped with the current time.
    pub fn new(
        event_type: TaskEventKind,
        id: i64,
        title: impl Into<String>,
        description: Option<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            id,
            title: title.into(),
            description,
            status: status.into(),
            occurred_at: Utc::now(),
        }
    }
}
