//! Helpers shared by the resource caches

use serde::Serialize;

use crate::client::api::ApiClient;
use crate::client::error::ClientError;
use crate::client::notify::Notifier;
use crate::client::storage::Storage;

/// Refuse a mutation when no session is held; nothing is sent
pub(crate) fn require_auth(
    api: &ApiClient,
    notifier: &Notifier,
    action: &str,
) -> Result<(), ClientError> {
    if api.has_token() {
        return Ok(());
    }
    notifier.error(format!("Please log in to {action}."));
    Err(ClientError::NotAuthenticated)
}

/// Log a failed round trip and surface it as a notification
pub(crate) fn report_failure(notifier: &Notifier, action: &str, err: ClientError) -> ClientError {
    tracing::error!("Failed to {}: {}", action, err);
    notifier.error(format!("Failed to {action}."));
    err
}

/// Write a cache mirror; a storage failure only costs durability
pub(crate) fn save_mirror<T: Serialize + ?Sized>(storage: &Storage, key: &str, value: &T) {
    if let Err(e) = storage.set_json(key, value) {
        tracing::warn!("Failed to persist {}: {}", key, e);
    }
}
