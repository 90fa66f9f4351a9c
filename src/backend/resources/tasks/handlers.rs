//! HTTP handlers for `/api/tasks`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::{DeleteResponse, NewTask, Task, TaskUpdate};

pub const TASK_NOT_FOUND: &str = "Task not found";

/// GET /api/tasks
pub async fn list_tasks(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Task>>, BackendError> {
    let tasks = db::list_tasks(&pool, &user.id).await?;
    tracing::debug!("Listed {} tasks for {}", tasks.len(), user.username);
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), BackendError> {
    let Json(new_task) = payload?;
    new_task.validate()?;

    let task = db::insert_task(&pool, &user.id, &new_task).await?;
    tracing::info!("Task {} created for {}", task.id, user.username);
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Task>, BackendError> {
    let Json(update) = payload?;
    update.validate()?;

    let task = db::update_task(&pool, &user.id, &id, &update)
        .await?
        .ok_or_else(|| BackendError::not_found(TASK_NOT_FOUND))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    if !db::delete_task(&pool, &user.id, &id).await? {
        return Err(BackendError::not_found(TASK_NOT_FOUND));
    }

    tracing::info!("Task {} deleted for {}", id, user.username);
    Ok(Json(DeleteResponse {
        message: "Task deleted".to_string(),
    }))
}
