/**
 * Client Context
 *
 * Owns every piece of client state: session, caches, budget ledger,
 * notifier and storage. Authentication goes through the context so each
 * transition refreshes all caches before the call returns: a login fills
 * them from the server and a logout empties them.
 */

use serde_json::Value;

use crate::client::api::ApiClient;
use crate::client::budget::BudgetLedger;
use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::client::expenses::ExpenseCache;
use crate::client::moods::MoodCache;
use crate::client::notify::Notifier;
use crate::client::session::Session;
use crate::client::storage::Storage;
use crate::client::tasks::TaskCache;
use crate::shared::UserSummary;

#[derive(Debug)]
pub struct ClientContext {
    session: Session,
    tasks: TaskCache,
    expenses: ExpenseCache,
    moods: MoodCache,
    budget: BudgetLedger,
    notifier: Notifier,
    storage: Storage,
}

impl ClientContext {
    /// Open the configured storage and restore any saved session
    pub fn open(config: ClientConfig) -> Result<Self, ClientError> {
        let storage = match config.storage_path() {
            Some(path) => Storage::open(path)?,
            None => Storage::in_memory(),
        };
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: ClientConfig, storage: Storage) -> Self {
        let api = ApiClient::new(config);
        let notifier = Notifier::default();

        Self {
            session: Session::restore(api.clone(), storage.clone(), notifier.clone()),
            tasks: TaskCache::new(api.clone(), storage.clone(), notifier.clone()),
            expenses: ExpenseCache::new(api.clone(), storage.clone(), notifier.clone()),
            moods: MoodCache::new(api, storage.clone(), notifier.clone()),
            budget: BudgetLedger::new(storage.clone()),
            notifier,
            storage,
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserSummary, ClientError> {
        let user = self.session.login(username, password).await?;
        self.refresh().await;
        Ok(user)
    }

    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        captcha_question: &str,
        captcha_answer: Value,
    ) -> Result<UserSummary, ClientError> {
        let user = self
            .session
            .register(username, password, captcha_question, captcha_answer)
            .await?;
        self.refresh().await;
        Ok(user)
    }

    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.session.logout()?;
        self.refresh().await;
        Ok(())
    }

    /// Bring every cache in line with the current session.
    ///
    /// Fetch failures are logged by the caches and leave their state as is.
    pub async fn refresh(&mut self) {
        let _ = self.tasks.fetch().await;
        let _ = self.expenses.fetch().await;
        let _ = self.moods.fetch().await;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn tasks(&self) -> &TaskCache {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskCache {
        &mut self.tasks
    }

    pub fn expenses(&self) -> &ExpenseCache {
        &self.expenses
    }

    pub fn expenses_mut(&mut self) -> &mut ExpenseCache {
        &mut self.expenses
    }

    pub fn moods(&self) -> &MoodCache {
        &self.moods
    }

    pub fn moods_mut(&mut self) -> &mut MoodCache {
        &mut self.moods
    }

    pub fn budget(&self) -> &BudgetLedger {
        &self.budget
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_api() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1", "username": "ada", "token": "tok"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "t1", "title": "One", "date": "2024-03-01", "completed": false, "user": "u1"
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/expenses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/moods"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "m1", "date": "2024-03-01", "value": 2, "user": "u1"}
            ])))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_login_fills_and_logout_clears_caches() {
        let server = mock_api().await;
        let config = ClientConfig::new(server.uri()).without_storage();
        let mut context = ClientContext::with_storage(config, Storage::in_memory());

        context.login("ada", "pw").await.unwrap();
        assert!(context.is_authenticated());
        assert_eq!(context.tasks().all().len(), 1);
        assert_eq!(context.moods().get("2024-03-01"), Some(2));

        context.logout().await.unwrap();
        assert!(!context.is_authenticated());
        assert!(context.tasks().all().is_empty());
        assert!(context.moods().all().is_empty());
        assert_eq!(context.notifier().message().as_deref(), Some("Logged out."));
    }

    #[tokio::test]
    async fn test_open_restores_session_from_file() {
        let server = mock_api().await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("storage.json");

        {
            let config = ClientConfig::new(server.uri()).with_storage_path(&file);
            let mut context = ClientContext::open(config).unwrap();
            context.login("ada", "pw").await.unwrap();
            context.budget().set_daily_budget(40.0, "2024-03-01").unwrap();
        }

        let config = ClientConfig::new(server.uri()).with_storage_path(&file);
        let context = ClientContext::open(config).unwrap();
        assert!(context.is_authenticated());
        assert_eq!(context.session().user().map(|u| u.username.as_str()), Some("ada"));
        assert_eq!(context.tasks().all().len(), 1);
        assert_eq!(context.budget().daily_budget("2024-03-04"), 40.0);
    }
}
