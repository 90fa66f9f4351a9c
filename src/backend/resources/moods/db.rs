//! Database operations for moods

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Mood, MoodEntry};

pub async fn list_moods(pool: &SqlitePool, user_id: &str) -> Result<Vec<Mood>, sqlx::Error> {
    sqlx::query_as::<_, Mood>(
        r#"
        SELECT id, date, value, user_id
        FROM moods
        WHERE user_id = ?
        ORDER BY date
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Create the mood for `(user_id, entry.date)` or overwrite its value.
///
/// An overwritten record keeps its id.
pub async fn upsert_mood(
    pool: &SqlitePool,
    user_id: &str,
    entry: &MoodEntry,
) -> Result<Mood, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, Mood>(
        r#"
        INSERT INTO moods (id, user_id, date, value)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (user_id, date) DO UPDATE SET value = excluded.value
        RETURNING id, date, value, user_id
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&entry.date)
    .bind(entry.value)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::connect_in_memory;

    #[tokio::test]
    async fn test_upsert_overwrites_same_date() {
        let pool = connect_in_memory().await.unwrap();
        let ada = create_user(&pool, "ada", "hash").await.unwrap().id;

        let first = upsert_mood(&pool, &ada, &MoodEntry::new("2024-03-01", 2)).await.unwrap();
        let second = upsert_mood(&pool, &ada, &MoodEntry::new("2024-03-01", 5)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.value, 5);
        assert_eq!(list_moods(&pool, &ada).await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_same_date_for_different_users() {
        let pool = connect_in_memory().await.unwrap();
        let ada = create_user(&pool, "ada", "hash").await.unwrap().id;
        let grace = create_user(&pool, "grace", "hash").await.unwrap().id;

        upsert_mood(&pool, &ada, &MoodEntry::new("2024-03-01", 1)).await.unwrap();
        upsert_mood(&pool, &grace, &MoodEntry::new("2024-03-01", 4)).await.unwrap();

        assert_eq!(list_moods(&pool, &ada).await.unwrap()[0].value, 1);
        assert_eq!(list_moods(&pool, &grace).await.unwrap()[0].value, 4);
    }
}
