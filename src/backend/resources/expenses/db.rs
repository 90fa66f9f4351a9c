//! Database operations for expenses

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Expense, ExpenseUpdate, NewExpense};

pub async fn list_expenses(pool: &SqlitePool, user_id: &str) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        SELECT id, amount, category, note, date, user_id
        FROM expenses
        WHERE user_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert an expense owned by `user_id`; `expense` must already be validated
pub async fn insert_expense(
    pool: &SqlitePool,
    user_id: &str,
    expense: &NewExpense,
) -> Result<Expense, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, Expense>(
        r#"
        INSERT INTO expenses (id, user_id, amount, category, note, date, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, amount, category, note, date, user_id
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(expense.amount)
    .bind(&expense.category)
    .bind(&expense.note)
    .bind(&expense.date)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn update_expense(
    pool: &SqlitePool,
    user_id: &str,
    id: &str,
    update: &ExpenseUpdate,
) -> Result<Option<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        UPDATE expenses SET
            amount = COALESCE(?, amount),
            category = COALESCE(?, category),
            note = CASE WHEN ? THEN ? ELSE note END,
            date = COALESCE(?, date)
        WHERE id = ? AND user_id = ?
        RETURNING id, amount, category, note, date, user_id
        "#,
    )
    .bind(update.amount)
    .bind(&update.category)
    .bind(update.note.is_some())
    .bind(update.note.clone().flatten())
    .bind(&update.date)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_expense(pool: &SqlitePool, user_id: &str, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
