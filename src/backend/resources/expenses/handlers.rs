//! HTTP handlers for `/api/expenses`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::{DeleteResponse, Expense, ExpenseUpdate, NewExpense};

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";

/// GET /api/expenses
pub async fn list_expenses(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Expense>>, BackendError> {
    Ok(Json(db::list_expenses(&pool, &user.id).await?))
}

/// POST /api/expenses
pub async fn create_expense(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), BackendError> {
    let Json(new_expense) = payload?;
    new_expense.validate()?;

    let expense = db::insert_expense(&pool, &user.id, &new_expense).await?;
    tracing::info!("Expense {} created for {}", expense.id, user.username);
    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/{id}
pub async fn update_expense(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<Expense>, BackendError> {
    let Json(update) = payload?;
    update.validate()?;

    db::update_expense(&pool, &user.id, &id, &update)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(EXPENSE_NOT_FOUND))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    if !db::delete_expense(&pool, &user.id, &id).await? {
        return Err(BackendError::not_found(EXPENSE_NOT_FOUND));
    }

    tracing::info!("Expense {} deleted for {}", id, user.username);
    Ok(Json(DeleteResponse {
        message: "Expense deleted".to_string(),
    }))
}
