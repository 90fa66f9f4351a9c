/**
 * Tasks Cache
 *
 * In-memory mirror of the caller's tasks, persisted under the `tasks` key.
 * Mutations go to the server first; the local list is patched only with
 * what the server returned.
 */

use crate::client::api::ApiClient;
use crate::client::cache::{report_failure, require_auth, save_mirror};
use crate::client::error::ClientError;
use crate::client::notify::Notifier;
use crate::client::storage::Storage;
use crate::shared::{DeleteResponse, NewTask, Task, TaskUpdate};

pub const TASKS_KEY: &str = "tasks";

#[derive(Debug)]
pub struct TaskCache {
    api: ApiClient,
    storage: Storage,
    notifier: Notifier,
    tasks: Vec<Task>,
}

impl TaskCache {
    pub fn new(api: ApiClient, storage: Storage, notifier: Notifier) -> Self {
        let tasks = storage.get_json(TASKS_KEY).unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            tasks,
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks planned for `date`, in list order
    pub fn for_date(&self, date: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date == date).collect()
    }

    /// Replace the list with the server's, or clear it when logged out
    pub async fn fetch(&mut self) -> Result<(), ClientError> {
        if !self.api.has_token() {
            self.replace(Vec::new());
            return Ok(());
        }

        let tasks: Vec<Task> = self.api.get("/api/tasks").await.map_err(|e| {
            tracing::error!("Failed to fetch tasks: {}", e);
            e
        })?;
        tracing::debug!("Fetched {} tasks", tasks.len());
        self.replace(tasks);
        Ok(())
    }

    pub async fn add(&mut self, task: &NewTask) -> Result<Task, ClientError> {
        require_auth(&self.api, &self.notifier, "add tasks")?;

        let created: Task = self
            .api
            .post("/api/tasks", task)
            .await
            .map_err(|e| report_failure(&self.notifier, "add task", e))?;

        self.tasks.push(created.clone());
        self.save();
        self.notifier.success("Task added!");
        Ok(created)
    }

    pub async fn edit(&mut self, id: &str, update: &TaskUpdate) -> Result<Task, ClientError> {
        require_auth(&self.api, &self.notifier, "edit tasks")?;

        let updated: Task = self
            .api
            .put(&format!("/api/tasks/{id}"), update)
            .await
            .map_err(|e| report_failure(&self.notifier, "edit task", e))?;

        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated.clone();
            self.save();
        }
        self.notifier.success("Task updated!");
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        require_auth(&self.api, &self.notifier, "delete tasks")?;

        let _: DeleteResponse = self
            .api
            .delete(&format!("/api/tasks/{id}"))
            .await
            .map_err(|e| report_failure(&self.notifier, "delete task", e))?;

        self.tasks.retain(|t| t.id != id);
        self.save();
        self.notifier.success("Task deleted!");
        Ok(())
    }

    /// Flip `completed` through a regular edit.
    ///
    /// Returns `Ok(None)` when the task is not in the local list.
    pub async fn toggle_completion(&mut self, id: &str) -> Result<Option<Task>, ClientError> {
        require_auth(&self.api, &self.notifier, "complete tasks")?;

        let Some(task) = self.get(id) else {
            return Ok(None);
        };
        let mut update = TaskUpdate::from(task);
        update.completed = Some(!task.completed);

        self.edit(id, &update).await.map(Some)
    }

    /// Replace the local order; the server keeps no order
    pub fn reorder(&mut self, tasks: Vec<Task>) -> Result<(), ClientError> {
        require_auth(&self.api, &self.notifier, "reorder tasks")?;
        self.replace(tasks);
        Ok(())
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.save();
    }

    fn save(&self) {
        save_mirror(&self.storage, TASKS_KEY, &self.tasks);
    }
}
