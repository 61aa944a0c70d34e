//! File-backed session store, the CLI's stand-in for browser local storage.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use integram_core::ports::{SessionStore, SessionStoreError};

type Entries = BTreeMap<String, String>;

/// Stores all keys as one JSON object in a single file.
///
/// A missing file reads as an empty store. Writes replace the file through a
/// sibling temporary file so a crash never leaves half a JSON document.
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, SessionStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| SessionStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        tracing::debug!(path = %self.path.display(), key, "Session key stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}
