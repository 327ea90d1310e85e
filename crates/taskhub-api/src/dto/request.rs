//! Request DTOs with validation.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use taskhub_core::error::AppError;
use taskhub_core::types::pagination::PageRequest;
use taskhub_entity::task::{NewTask, TaskPatch, TaskStatus, UpdateTask};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "must not be blank"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "must not be blank"))]
    pub password: String,
}

/// Create/replace task request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskRequest {
    /// Title (required, at most 255 characters).
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: String,
    /// Description (optional, at most 1000 characters).
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub description: Option<String>,
    /// Status name; blank or missing means `PENDING`.
    pub status: Option<String>,
}

impl TaskRequest {
    /// Parse into a new-task entity. A missing or blank status defaults to
    /// pending; an unknown status is a validation error.
    pub fn into_new_task(self) -> Result<NewTask, AppError> {
        let status = parse_status_or_default(self.status.as_deref())?;
        Ok(NewTask {
            title: self.title,
            description: self.description,
            status,
        })
    }

    /// Parse into a full-update entity with the same status rules as
    /// [`into_new_task`](Self::into_new_task).
    pub fn into_update(self) -> Result<UpdateTask, AppError> {
        let status = parse_status_or_default(self.status.as_deref())?;
        Ok(UpdateTask {
            title: self.title,
            description: self.description,
            status,
        })
    }
}

/// Partial task update body; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskPatchRequest {
    /// New title, if provided.
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub title: Option<String>,
    /// New description, if provided.
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub description: Option<String>,
    /// New status, if provided. Explicitly blank is rejected.
    pub status: Option<String>,
}

impl TaskPatchRequest {
    /// Parse into a patch entity. Unlike create/replace, a status that is
    /// present but blank is an error rather than a default.
    pub fn into_patch(self) -> Result<TaskPatch, AppError> {
        let status = match self.status.as_deref() {
            None => None,
            Some(s) if s.trim().is_empty() => {
                return Err(AppError::validation(format!("Invalid status: {s}")));
            }
            Some(s) => Some(s.parse::<TaskStatus>()?),
        };

        Ok(TaskPatch {
            title: self.title,
            description: self.description,
            status,
        })
    }
}

/// Query parameters for task search.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSearchQuery {
    /// Optional status filter.
    pub status: Option<String>,
    /// Optional lower bound on creation time (ISO-8601).
    pub from: Option<String>,
    /// Optional upper bound on creation time (ISO-8601).
    pub to: Option<String>,
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
    /// Page size.
    #[serde(default = "default_size")]
    pub size: u64,
}

impl TaskSearchQuery {
    /// Parse the status filter; blank is treated as absent.
    pub fn status_filter(&self) -> Result<Option<TaskStatus>, AppError> {
        match self.status.as_deref() {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Ok(Some(s.parse::<TaskStatus>()?)),
        }
    }

    /// Parse the `from` bound.
    pub fn from_filter(&self) -> Result<Option<DateTime<Utc>>, AppError> {
        parse_optional_datetime(self.from.as_deref(), "from")
    }

    /// Parse the `to` bound.
    pub fn to_filter(&self) -> Result<Option<DateTime<Utc>>, AppError> {
        parse_optional_datetime(self.to.as_deref(), "to")
    }

    /// The pagination window.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

fn default_size() -> u64 {
    20
}

fn parse_status_or_default(status: Option<&str>) -> Result<TaskStatus, AppError> {
    match status {
        None => Ok(TaskStatus::default()),
        Some(s) if s.trim().is_empty() => Ok(TaskStatus::default()),
        Some(s) => s.parse(),
    }
}

/// Accepts RFC 3339 (`2024-01-01T10:00:00Z`) or a naive local datetime
/// (`2024-01-01T10:00:00`, taken as UTC).
fn parse_optional_datetime(
    value: Option<&str>,
    field: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = value else { return Ok(None) };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| AppError::validation(format!("Invalid date for {field}: {raw}")))
}
