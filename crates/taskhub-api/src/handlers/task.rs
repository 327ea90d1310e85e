//! Task CRUD handlers. All routes require an authenticated caller.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use taskhub_core::types::pagination::PageResponse;
use taskhub_database::repositories::task::TaskFilter;

use crate::dto::request::{TaskPatchRequest, TaskRequest, TaskSearchQuery};
use crate::dto::response::TaskResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<TaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    req.validate().map_err(validation_error)?;

    let task = state.task_service.create(req.into_new_task()?).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /api/tasks
pub async fn search_tasks(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<TaskSearchQuery>,
) -> Result<Json<PageResponse<TaskResponse>>, ApiError> {
    let filter = TaskFilter {
        status: query.status_filter()?,
        created_from: query.from_filter()?,
        created_to: query.to_filter()?,
    };
    let page = query.page_request();

    let result = state.task_service.search(&filter, &page).await?;
    Ok(Json(result.map(TaskResponse::from)))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.task_service.find_by_id(id).await?;
    Ok(Json(task.into()))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let task = state.task_service.update(id, req.into_update()?).await?;
    Ok(Json(task.into()))
}

/// PATCH /api/tasks/{id}
pub async fn patch_task(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(req): Json<TaskPatchRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let task = state.task_service.patch(id, req.into_patch()?).await?;
    Ok(Json(task.into()))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.task_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
