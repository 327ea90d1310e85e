//! Task repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use taskhub_core::error::{AppError, ErrorKind};
use taskhub_core::result::AppResult;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_entity::task::{NewTask, Task, TaskStatus, UpdateTask};

/// Optional filters for the task search query.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Restrict to a single status.
    pub status: Option<TaskStatus>,
    /// Only tasks created at or after this instant.
    pub created_from: Option<DateTime<Utc>>,
    /// Only tasks created at or before this instant.
    pub created_to: Option<DateTime<Utc>>,
}

/// Repository for task CRUD and search operations.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a task and return the stored row.
    pub async fn create(&self, task: NewTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, status) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task by id", e))
    }

    /// Search tasks with optional filters, newest first, paginated.
    pub async fn search(
        &self,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks \
             WHERE ($1::task_status IS NULL OR status = $1) \
               AND ($2::timestamptz IS NULL OR created_at >= $2) \
               AND ($3::timestamptz IS NULL OR created_at <= $3)",
        )
        .bind(filter.status)
        .bind(filter.created_from)
        .bind(filter.created_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))?;

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks \
             WHERE ($1::task_status IS NULL OR status = $1) \
               AND ($2::timestamptz IS NULL OR created_at >= $2) \
               AND ($3::timestamptz IS NULL OR created_at <= $3) \
             ORDER BY created_at DESC, id DESC LIMIT $4 OFFSET $5",
        )
        .bind(filter.status)
        .bind(filter.created_from)
        .bind(filter.created_to)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search tasks", e))?;

        Ok(PageResponse::new(tasks, page, total as u64))
    }

    /// Replace all mutable fields of a task; returns `None` when the id is
    /// unknown.
    pub async fn update(&self, id: i64, update: UpdateTask) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $2, description = $3, status = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))
    }

    /// Delete a task; returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}
