//! HTTP handlers for `/api/moods`

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::{Mood, MoodEntry};

/// GET /api/moods
pub async fn list_moods(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Mood>>, BackendError> {
    Ok(Json(db::list_moods(&pool, &user.id).await?))
}

/// POST /api/moods: create or overwrite the caller's mood for a date
pub async fn set_mood(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<MoodEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<Mood>), BackendError> {
    let Json(entry) = payload?;
    entry.validate()?;

    let mood = db::upsert_mood(&pool, &user.id, &entry).await?;
    tracing::info!("Mood for {} set to {} by {}", mood.date, mood.value, user.username);
    Ok((StatusCode::CREATED, Json(mood)))
}
