//! Durable key-value storage
//!
//! Every value is a JSON-encoded string stored under a fixed key. With a
//! backing file the whole map is rewritten on each change and read back on
//! open, so state survives restarts. Without one the map lives in memory.
//!
//! Writes go to a temporary sibling that is renamed over the file, and the
//! in-memory map only changes once that succeeds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::error::ClientError;

/// Shared handle to the store; clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct Storage {
    path: Option<Arc<PathBuf>>,
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl Storage {
    /// Store that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store backed by `path`, loading it if the file exists.
    ///
    /// A file that does not parse is logged and replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Starting with empty storage, {} is unreadable: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened storage at {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path: Some(Arc::new(path)),
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    /// Raw string stored under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), ClientError> {
        let mut entries = self.lock();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.into());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), ClientError> {
        let mut entries = self.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    /// Decode the value under `key`.
    ///
    /// A value that no longer parses is treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring unreadable value under {:?}: {}", key, e);
                None
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), ClientError> {
        let encoded = serde_json::to_string(value)?;
        self.set(key, encoded)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
