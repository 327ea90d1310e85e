//! Task CRUD and search use cases.
//!
//! Every mutation publishes the corresponding task event after the write
//! has been persisted; publishing never fails the request.

use std::sync::Arc;

use tracing::{info, warn};

use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_core::types::pagination::{PageRequest, PageResponse};
use taskhub_database::repositories::task::{TaskFilter, TaskRepository};
use taskhub_entity::task::{NewTask, Task, TaskPatch, UpdateTask};
use taskhub_messaging::TaskEventPublisher;

/// Application service for task operations.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<TaskRepository>,
    publisher: Arc<dyn TaskEventPublisher>,
}

impl TaskService {
    /// Create a new task service.
    pub fn new(repository: Arc<TaskRepository>, publisher: Arc<dyn TaskEventPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Create a task and publish a creation event.
    pub async fn create(&self, task: NewTask) -> AppResult<Task> {
        let created = self.repository.create(task).await?;
        info!(
            id = created.id,
            title = %created.title,
            status = %created.status,
            "Task created"
        );
        self.publisher.task_created(&created).await;
        Ok(created)
    }

    /// Search tasks with optional filters and pagination.
    pub async fn search(
        &self,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        let result = self.repository.search(filter, page).await?;
        info!(
            status = ?filter.status,
            from = ?filter.created_from,
            to = ?filter.created_to,
            page = page.page,
            size = page.size,
            total = result.total_items,
            "Tasks fetched"
        );
        Ok(result)
    }

    /// Fetch a single task; unknown ids are a not-found error.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Task> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!(id, "Task not found");
            AppError::not_found(format!("Task not found: {id}"))
        })
    }

    /// Replace all mutable fields of a task and publish an update event.
    pub async fn update(&self, id: i64, update: UpdateTask) -> AppResult<Task> {
        let updated = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task not found: {id}")))?;
        info!(
            id = updated.id,
            title = %updated.title,
            status = %updated.status,
            "Task updated"
        );
        self.publisher.task_updated(&updated).await;
        Ok(updated)
    }

    /// Apply only the provided fields of `patch` and publish a patch event.
    pub async fn patch(&self, id: i64, patch: TaskPatch) -> AppResult<Task> {
        let existing = self.find_by_id(id).await?;

        let merged = UpdateTask {
            title: patch.title.unwrap_or(existing.title),
            description: patch.description.or(existing.description),
            status: patch.status.unwrap_or(existing.status),
        };

        let patched = self
            .repository
            .update(id, merged)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task not found: {id}")))?;
        info!(
            id = patched.id,
            title = %patched.title,
            status = %patched.status,
            "Task patched"
        );
        self.publisher.task_patched(&patched).await;
        Ok(patched)
    }

    /// Delete a task and publish a deletion event.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let existing = self.find_by_id(id).await?;
        self.repository.delete(id).await?;
        info!(id = existing.id, title = %existing.title, "Task deleted");
        self.publisher.task_deleted(&existing).await;
        Ok(())
    }
}
