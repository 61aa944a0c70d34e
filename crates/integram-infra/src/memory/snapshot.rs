//! JSON snapshots of the in-memory backend, so short-lived processes can share
//! its data through a file.

use std::io::ErrorKind;
use std::path::Path;

use tokio::sync::RwLock;

use super::backend::{InMemoryBackend, Store};

/// Snapshot errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InMemoryBackend {
    /// Load a backend saved with [`InMemoryBackend::save`]. A missing or empty
    /// file yields an empty backend.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let store = match tokio::fs::read_to_string(path).await {
            Ok(raw) if raw.trim().is_empty() => Store::default(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Store::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), "In-memory backend loaded");

        Ok(Self {
            store: RwLock::new(store),
        })
    }

    /// Write every user, post and comment to `path`, replacing it atomically.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let raw = serde_json::to_string(&*self.store.read().await)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, path).await?;

        tracing::debug!(path = %path.display(), "In-memory backend saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use integram_core::ports::Backend;
    use integram_shared::dto::LoginRequest;

    use super::*;

    #[tokio::test]
    async fn test_saved_data_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("integram.json");

        let backend = InMemoryBackend::new();
        backend.populate().await.unwrap();
        backend.save(&path).await.unwrap();

        let reloaded = InMemoryBackend::load(&path).await.unwrap();
        assert_eq!(
            reloaded.list_posts().await.unwrap(),
            backend.list_posts().await.unwrap()
        );
        let session = reloaded
            .login(&LoginRequest {
                username: "Messi".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.user.username, "Messi");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_backend() {
        let dir = tempfile::tempdir().unwrap();

        let backend = InMemoryBackend::load(dir.path().join("absent.json"))
            .await
            .unwrap();

        assert!(backend.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("integram.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = InMemoryBackend::load(&path).await.err().unwrap();
        assert!(matches!(err, SnapshotError::Serialization(_)));
    }
}
