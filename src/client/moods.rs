//! Moods Cache
//!
//! The server's mood list reshaped into a date → value map, persisted under
//! the `moods` key.

use std::collections::BTreeMap;

use crate::client::api::ApiClient;
use crate::client::cache::{report_failure, require_auth, save_mirror};
use crate::client::error::ClientError;
use crate::client::notify::Notifier;
use crate::client::storage::Storage;
use crate::shared::{Mood, MoodEntry};

pub const MOODS_KEY: &str = "moods";

#[derive(Debug)]
pub struct MoodCache {
    api: ApiClient,
    storage: Storage,
    notifier: Notifier,
    moods: BTreeMap<String, i64>,
}

impl MoodCache {
    pub fn new(api: ApiClient, storage: Storage, notifier: Notifier) -> Self {
        let moods = storage.get_json(MOODS_KEY).unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            moods,
        }
    }

    pub fn all(&self) -> &BTreeMap<String, i64> {
        &self.moods
    }

    pub fn get(&self, date: &str) -> Option<i64> {
        self.moods.get(date).copied()
    }

    pub async fn fetch(&mut self) -> Result<(), ClientError> {
        if !self.api.has_token() {
            self.replace(BTreeMap::new());
            return Ok(());
        }

        let moods: Vec<Mood> = self.api.get("/api/moods").await.map_err(|e| {
            tracing::error!("Failed to fetch moods: {}", e);
            e
        })?;
        self.replace(moods.into_iter().map(|m| (m.date, m.value)).collect());
        Ok(())
    }

    /// Record `value` for `date`; the map takes the value the server stored
    pub async fn set(&mut self, date: &str, value: i64) -> Result<i64, ClientError> {
        require_auth(&self.api, &self.notifier, "set your mood")?;

        let mood: Mood = self
            .api
            .post("/api/moods", &MoodEntry::new(date, value))
            .await
            .map_err(|e| report_failure(&self.notifier, "set mood", e))?;

        self.moods.insert(date.to_string(), mood.value);
        self.save();
        self.notifier.success("Mood saved!");
        Ok(mood.value)
    }

    fn replace(&mut self, moods: BTreeMap<String, i64>) {
        self.moods = moods;
        self.save();
    }

    fn save(&self) {
        save_mirror(&self.storage, MOODS_KEY, &self.moods);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cache_for(server: &MockServer, token: Option<&str>) -> (MoodCache, Notifier) {
        let api = ApiClient::new(ClientConfig::new(server.uri()).without_storage());
        api.set_token(token.map(str::to_string));
        let notifier = Notifier::default();
        (
            MoodCache::new(api, Storage::in_memory(), notifier.clone()),
            notifier,
        )
    }

    #[tokio::test]
    async fn test_fetch_builds_date_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/moods"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "m1", "date": "2024-03-01", "value": 3, "user": "u1"},
                {"id": "m2", "date": "2024-03-02", "value": 5, "user": "u1"}
            ])))
            .mount(&server)
            .await;

        let (mut cache, _) = cache_for(&server, Some("tok"));
        cache.fetch().await.unwrap();

        assert_eq!(cache.get("2024-03-01"), Some(3));
        assert_eq!(cache.get("2024-03-02"), Some(5));
        assert_eq!(cache.get("2024-03-03"), None);
    }

    #[tokio::test]
    async fn test_set_uses_server_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/moods"))
            .and(body_json(json!({"date": "2024-03-01", "value": 4})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "m1", "date": "2024-03-01", "value": 4, "user": "u1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (mut cache, notifier) = cache_for(&server, Some("tok"));
        assert_eq!(cache.set("2024-03-01", 4).await.unwrap(), 4);
        assert_eq!(cache.get("2024-03-01"), Some(4));
        assert_eq!(notifier.message().as_deref(), Some("Mood saved!"));
    }

    #[tokio::test]
    async fn test_set_requires_session() {
        let server = MockServer::start().await;
        let (mut cache, notifier) = cache_for(&server, None);

        assert!(cache.set("2024-03-01", 4).await.is_err());
        assert_eq!(
            notifier.message().as_deref(),
            Some("Please log in to set your mood.")
        );
    }
}
