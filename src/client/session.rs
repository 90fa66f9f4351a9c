/**
 * Client Session Store
 *
 * Holds the bearer token and the user it belongs to, mirrored to durable
 * storage under `auth_token` and `auth_user` so a session survives
 * restarts. The token lives in the shared `ApiClient`, which makes it the
 * default Authorization header of every request.
 *
 * Subscribers observe the authenticated flag through a `watch` channel.
 */

use serde_json::Value;
use tokio::sync::watch;

use crate::client::api::ApiClient;
use crate::client::error::ClientError;
use crate::client::notify::Notifier;
use crate::client::storage::Storage;
use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    storage: Storage,
    notifier: Notifier,
    user: Option<UserSummary>,
    authenticated: watch::Sender<bool>,
}

impl Session {
    /// Load any persisted session and install its token on `api`
    pub fn restore(api: ApiClient, storage: Storage, notifier: Notifier) -> Self {
        let token: Option<String> = storage.get_json(TOKEN_KEY);
        let user: Option<UserSummary> = storage.get_json(USER_KEY);

        api.set_token(token);
        let (authenticated, _) = watch::channel(api.has_token());
        if api.has_token() {
            tracing::debug!("Restored session for {:?}", user.as_ref().map(|u| &u.username));
        }

        Self {
            api,
            storage,
            notifier,
            user,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.has_token()
    }

    pub fn token(&self) -> Option<String> {
        self.api.token()
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    /// Receiver that sees every change of the authenticated flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserSummary, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self
            .api
            .post("/api/auth/login", &request)
            .await
            .inspect_err(|e| tracing::warn!("Login failed: {}", e))?;

        let user = self.establish(response)?;
        self.notifier.success("Logged in successfully!");
        Ok(user)
    }

    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        captcha_question: &str,
        captcha_answer: Value,
    ) -> Result<UserSummary, ClientError> {
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            captcha_question: Some(captcha_question.to_string()),
            captcha_answer: Some(captcha_answer),
        };

        let response: AuthResponse = self
            .api
            .post("/api/auth/register", &request)
            .await
            .inspect_err(|e| tracing::warn!("Registration failed: {}", e))?;

        let user = self.establish(response)?;
        self.notifier.success("Registered and logged in!");
        Ok(user)
    }

    /// Forget the token and user, in memory and in storage
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.api.set_token(None);
        self.user = None;
        self.authenticated.send_replace(false);

        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;

        tracing::info!("Logged out");
        self.notifier.success("Logged out.");
        Ok(())
    }

    fn establish(&mut self, response: AuthResponse) -> Result<UserSummary, ClientError> {
        let user = UserSummary::from(&response);

        self.api.set_token(Some(response.token.clone()));
        self.user = Some(user.clone());
        self.authenticated.send_replace(true);

        self.storage.set_json(TOKEN_KEY, &response.token)?;
        self.storage.set_json(USER_KEY, &user)?;

        tracing::info!("Session established for {}", user.username);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_for(server: &MockServer, storage: Storage) -> Session {
        let api = ApiClient::new(ClientConfig::new(server.uri()).without_storage());
        Session::restore(api, storage, Notifier::default())
    }

    async fn mount_login(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_partial_json(json!({"username": "ada"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "username": "ada",
                "token": "tok"
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_login_persists_and_publishes() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let storage = Storage::in_memory();
        let mut session = session_for(&server, storage.clone());
        let mut changes = session.subscribe();
        assert!(!*changes.borrow());

        let user = session.login("ada", "pw").await.unwrap();

        assert_eq!(user.username, "ada");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(changes.has_changed().unwrap());
        assert!(*changes.borrow_and_update());
        assert_eq!(storage.get_json::<String>(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(storage.get_json::<UserSummary>(USER_KEY), Some(user));
    }

    #[tokio::test]
    async fn test_restore_from_storage() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let storage = Storage::in_memory();
        session_for(&server, storage.clone()).login("ada", "pw").await.unwrap();

        let restored = session_for(&server, storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().map(|u| u.id.as_str()), Some("u1"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        let storage = Storage::in_memory();
        let mut session = session_for(&server, storage.clone());
        session.login("ada", "pw").await.unwrap();
        let changes = session.subscribe();

        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!*changes.borrow());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Invalid username or password",
                "status": 401
            })))
            .mount(&server)
            .await;

        let mut session = session_for(&server, Storage::in_memory());
        let err = session.login("ada", "wrong").await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(!session.is_authenticated());
    }
}
