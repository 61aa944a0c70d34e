use async_trait::async_trait;

/// Key under which the login response is persisted.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Session store trait - abstraction over local persistent key/value storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get a stored value.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Store a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Remove a key. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), SessionStoreError>;
}

/// Session storage errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
