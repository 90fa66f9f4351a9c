/**
 * Wire Models
 *
 * Records and request payloads exchanged between the client and the API.
 * Stored records carry their owner as `user`; payloads never do, so the
 * server is the only party that decides ownership.
 */

use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::dates::validate_date;
use crate::shared::error::SharedError;

/// A task planned for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Day the task belongs to (`YYYY-MM-DD`)
    pub date: String,
    #[serde(default)]
    pub completed: bool,
    /// Free-form category such as "Work" or "Study"
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
    /// Start time (`HH:MM`)
    #[serde(default)]
    #[cfg_attr(feature = "ssr", sqlx(rename = "start_time"))]
    pub start: Option<String>,
    /// End time (`HH:MM`)
    #[serde(default)]
    #[cfg_attr(feature = "ssr", sqlx(rename = "end_time"))]
    pub end: Option<String>,
    #[serde(rename = "user")]
    #[cfg_attr(feature = "ssr", sqlx(rename = "user_id"))]
    pub owner: String,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::required("title"));
        }
        validate_date("date", &self.date)
    }
}

/// Present-but-null becomes `Some(None)`, telling "clear it" apart from an
/// absent field (`None` through `#[serde(default)]`)
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `PUT /api/tasks/:id`.
///
/// Absent fields are left unchanged. The optional text fields take an
/// explicit `null` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(rename = "type", default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub start: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub end: Option<Option<String>>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(SharedError::required("title"));
        }
        match &self.date {
            Some(date) => validate_date("date", date),
            None => Ok(()),
        }
    }
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            date: Some(task.date.clone()),
            completed: Some(task.completed),
            task_type: Some(task.task_type.clone()),
            start: Some(task.start.clone()),
            end: Some(task.end.clone()),
        }
    }
}

/// A single spending entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    pub date: String,
    #[serde(rename = "user")]
    #[cfg_attr(feature = "ssr", sqlx(rename = "user_id"))]
    pub owner: String,
}

impl Expense {
    /// Text shown next to the amount; empty when no note was given
    pub fn description(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Body of `POST /api/expenses`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub date: String,
}

impl NewExpense {
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            category: category.into(),
            note: None,
            date: date.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        match self.amount {
            None => return Err(SharedError::required("amount")),
            Some(amount) if !amount.is_finite() => {
                return Err(SharedError::validation("amount", "amount must be a number"));
            }
            Some(_) => {}
        }
        if self.category.trim().is_empty() {
            return Err(SharedError::required("category"));
        }
        validate_date("date", &self.date)
    }
}

/// Body of `PUT /api/expenses/:id`; absent fields are left unchanged and
/// `"note": null` clears the note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "description",
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<(), SharedError> {
        if matches!(self.amount, Some(amount) if !amount.is_finite()) {
            return Err(SharedError::validation("amount", "amount must be a number"));
        }
        if matches!(&self.category, Some(category) if category.trim().is_empty()) {
            return Err(SharedError::required("category"));
        }
        match &self.date {
            Some(date) => validate_date("date", date),
            None => Ok(()),
        }
    }
}

/// Mood recorded for one day; at most one per user and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Mood {
    pub id: String,
    pub date: String,
    pub value: i64,
    #[serde(rename = "user")]
    #[cfg_attr(feature = "ssr", sqlx(rename = "user_id"))]
    pub owner: String,
}

/// Body of `POST /api/moods` (create or overwrite the mood for `date`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl MoodEntry {
    pub fn new(date: impl Into<String>, value: i64) -> Self {
        Self {
            date: date.into(),
            value: Some(value),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        validate_date("date", &self.date)?;
        if self.value.is_none() {
            return Err(SharedError::required("value"));
        }
        Ok(())
    }
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Arithmetic challenge such as `"3 + 4"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_question: Option<String>,
    /// Caller's answer, either a JSON number or a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_answer: Option<serde_json::Value>,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: String,
    pub username: String,
    /// Bearer token, valid for 30 days
    pub token: String,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

impl From<&AuthResponse> for UserSummary {
    fn from(value: &AuthResponse) -> Self {
        Self {
            id: value.id.clone(),
            username: value.username.clone(),
        }
    }
}

/// Confirmation body for deletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_serializes_type_and_owner() {
        let task = Task {
            id: "t1".to_string(),
            title: "Write report".to_string(),
            description: None,
            date: "2024-03-01".to_string(),
            completed: false,
            task_type: Some("Work".to_string()),
            start: Some("09:00".to_string()),
            end: Some("10:30".to_string()),
            owner: "u1".to_string(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["type"], "Work");
        assert_eq!(value["user"], "u1");
        assert!(value.get("owner").is_none());
    }

    #[test]
    fn test_new_task_requires_title_and_date() {
        assert_eq!(NewTask::new("", "2024-03-01").validate().unwrap_err().detail(), "title is required");
        assert_eq!(NewTask::new("Run", "").validate().unwrap_err().detail(), "date is required");
        assert!(NewTask::new("Run", "2024-03-01").validate().is_ok());
    }

    #[test]
    fn test_new_task_ignores_owner_fields() {
        let payload: NewTask = serde_json::from_value(json!({
            "title": "Run",
            "date": "2024-03-01",
            "user": "someone-else"
        }))
        .unwrap();
        assert_eq!(payload, NewTask::new("Run", "2024-03-01"));
    }

    #[test]
    fn test_new_expense_accepts_description_alias() {
        let payload: NewExpense = serde_json::from_value(json!({
            "amount": 12.5,
            "category": "Food",
            "description": "lunch",
            "date": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(payload.note.as_deref(), Some("lunch"));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_update_tells_null_from_absent() {
        let update: TaskUpdate = serde_json::from_value(json!({"start": null, "end": "10:00"})).unwrap();
        assert_eq!(update.start, Some(None));
        assert_eq!(update.end, Some(Some("10:00".to_string())));
        assert_eq!(update.description, None);

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"start": null, "end": "10:00"}));

        let update: ExpenseUpdate = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(update.note, Some(None));
    }

    #[test]
    fn test_new_expense_requires_amount() {
        let payload = NewExpense {
            amount: None,
            category: "Food".to_string(),
            note: None,
            date: "2024-03-01".to_string(),
        };
        assert_eq!(payload.validate().unwrap_err().detail(), "amount is required");
    }

    #[test]
    fn test_mood_entry_requires_value() {
        let entry = MoodEntry {
            date: "2024-03-01".to_string(),
            value: None,
        };
        assert_eq!(entry.validate().unwrap_err().detail(), "value is required");
        assert!(MoodEntry::new("2024-03-01", 4).validate().is_ok());
    }

    #[test]
    fn test_register_request_uses_camel_case() {
        let request: RegisterRequest = serde_json::from_value(json!({
            "username": "ada",
            "password": "hunter22",
            "captchaQuestion": "3 + 4",
            "captchaAnswer": "7"
        }))
        .unwrap();
        assert_eq!(request.captcha_question.as_deref(), Some("3 + 4"));
        assert_eq!(request.captcha_answer, Some(json!("7")));
    }

    #[test]
    fn test_expense_description_falls_back_to_empty() {
        let expense = Expense {
            id: "e1".to_string(),
            amount: 3.0,
            category: "Coffee".to_string(),
            note: None,
            date: "2024-03-01".to_string(),
            owner: "u1".to_string(),
        };
        assert_eq!(expense.description(), "");
    }
}
