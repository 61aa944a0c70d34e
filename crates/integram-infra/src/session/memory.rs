//! In-memory session store - used when no session file is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use integram_core::ports::{SessionStore, SessionStoreError};

/// In-memory key/value store using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemorySessionStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        self.store.write().await.remove(key);
        Ok(())
    }
}
