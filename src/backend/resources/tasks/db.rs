//! Database operations for tasks
//!
//! Every statement is scoped by `user_id`; lookups by id alone do not exist.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{NewTask, Task, TaskUpdate};

/// All tasks owned by `user_id`, in insertion order
pub async fn list_tasks(pool: &SqlitePool, user_id: &str) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, date, completed, task_type, start_time, end_time, user_id
        FROM tasks
        WHERE user_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a task owned by `user_id`
pub async fn insert_task(
    pool: &SqlitePool,
    user_id: &str,
    task: &NewTask,
) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, user_id, title, description, date, completed, task_type, start_time, end_time, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, date, completed, task_type, start_time, end_time, user_id
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.date)
    .bind(task.completed.unwrap_or(false))
    .bind(&task.task_type)
    .bind(&task.start)
    .bind(&task.end)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Apply the present fields of `update` to the task `id` owned by `user_id`.
///
/// Nullable columns take a "present" flag next to the value, so an explicit
/// null clears them while an absent field keeps the stored one.
///
/// Returns `None` when no such task exists for that owner.
pub async fn update_task(
    pool: &SqlitePool,
    user_id: &str,
    id: &str,
    update: &TaskUpdate,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks SET
            title = COALESCE(?, title),
            description = CASE WHEN ? THEN ? ELSE description END,
            date = COALESCE(?, date),
            completed = COALESCE(?, completed),
            task_type = CASE WHEN ? THEN ? ELSE task_type END,
            start_time = CASE WHEN ? THEN ? ELSE start_time END,
            end_time = CASE WHEN ? THEN ? ELSE end_time END
        WHERE id = ? AND user_id = ?
        RETURNING id, title, description, date, completed, task_type, start_time, end_time, user_id
        "#,
    )
    .bind(&update.title)
    .bind(update.description.is_some())
    .bind(update.description.clone().flatten())
    .bind(&update.date)
    .bind(update.completed)
    .bind(update.task_type.is_some())
    .bind(update.task_type.clone().flatten())
    .bind(update.start.is_some())
    .bind(update.start.clone().flatten())
    .bind(update.end.is_some())
    .bind(update.end.clone().flatten())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete the task `id` owned by `user_id`; returns whether a row went away
pub async fn delete_task(pool: &SqlitePool, user_id: &str, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::connect_in_memory;

    async fn pool_with_users() -> (SqlitePool, String, String) {
        let pool = connect_in_memory().await.unwrap();
        let ada = create_user(&pool, "ada", "hash").await.unwrap();
        let grace = create_user(&pool, "grace", "hash").await.unwrap();
        (pool, ada.id, grace.id)
    }

    #[tokio::test]
    async fn test_insert_defaults_completed_to_false() {
        let (pool, ada, _) = pool_with_users().await;

        let task = insert_task(&pool, &ada, &NewTask::new("Write report", "2024-03-01"))
            .await
            .unwrap();

        assert!(!task.completed);
        assert_eq!(task.owner, ada);
        assert_eq!(list_tasks(&pool, &ada).await.unwrap(), vec![task]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let (pool, ada, grace) = pool_with_users().await;
        insert_task(&pool, &ada, &NewTask::new("Mine", "2024-03-01")).await.unwrap();

        assert!(list_tasks(&pool, &grace).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let (pool, ada, _) = pool_with_users().await;
        let mut new_task = NewTask::new("Write report", "2024-03-01");
        new_task.task_type = Some("Work".to_string());
        let task = insert_task(&pool, &ada, &new_task).await.unwrap();

        let update = TaskUpdate {
            completed: Some(true),
            ..TaskUpdate::default()
        };
        let updated = update_task(&pool, &ada, &task.id, &update).await.unwrap().unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Write report");
        assert_eq!(updated.task_type.as_deref(), Some("Work"));
    }

    #[tokio::test]
    async fn test_explicit_null_clears_optional_fields() {
        let (pool, ada, _) = pool_with_users().await;
        let mut new_task = NewTask::new("Gym", "2024-03-01");
        new_task.description = Some("legs".to_string());
        new_task.start = Some("07:00".to_string());
        let task = insert_task(&pool, &ada, &new_task).await.unwrap();

        let update: TaskUpdate = serde_json::from_str(r#"{"description": null}"#).unwrap();
        let updated = update_task(&pool, &ada, &task.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.description, None);
        assert_eq!(updated.start.as_deref(), Some("07:00"));
    }

    #[tokio::test]
    async fn test_update_and_delete_by_non_owner_match_nothing() {
        let (pool, ada, grace) = pool_with_users().await;
        let task = insert_task(&pool, &ada, &NewTask::new("Mine", "2024-03-01")).await.unwrap();

        let update = TaskUpdate {
            title: Some("Stolen".to_string()),
            ..TaskUpdate::default()
        };
        assert!(update_task(&pool, &grace, &task.id, &update).await.unwrap().is_none());
        assert!(!delete_task(&pool, &grace, &task.id).await.unwrap());

        assert!(delete_task(&pool, &ada, &task.id).await.unwrap());
        assert!(list_tasks(&pool, &ada).await.unwrap().is_empty());
    }
}
