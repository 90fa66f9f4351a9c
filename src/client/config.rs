use std::path::PathBuf;

/// Default API base URL
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// File holding the durable client state
const STORAGE_FILE: &str = "storage.json";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_url: String,
    storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let api_url =
            std::env::var("DAYLOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }
}

impl ClientConfig {
    /// Configuration for `api_url` with the platform storage location
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            storage_path: Self::default_storage_path(),
        }
    }

    /// Read `DAYLOG_API_URL`, falling back to the local development server
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Keep client state in memory only
    pub fn without_storage(mut self) -> Self {
        self.storage_path = None;
        self
    }

    pub fn server_url(&self) -> &str {
        &self.api_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub fn storage_path(&self) -> Option<&PathBuf> {
        self.storage_path.as_ref()
    }

    /// `<data dir>/daylog/storage.json`, when the platform has a data dir
    fn default_storage_path() -> Option<PathBuf> {
        dirs::data_dir().map(|mut path| {
            path.push("daylog");
            path.push(STORAGE_FILE);
            path
        })
    }
}
