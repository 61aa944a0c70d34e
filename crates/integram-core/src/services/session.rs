//! Session holder: login, the persisted `currentUser` snapshot, and logout.

use std::sync::Arc;

use integram_shared::dto::LoginRequest;

use crate::domain::{Session, UserId};
use crate::error::ClientError;
use crate::ports::{Backend, CURRENT_USER_KEY, SessionStore};

/// Logs users in and keeps the login response in a [`SessionStore`].
///
/// Pages receive the resulting [`Session`] explicitly; nothing reads the store
/// behind their back.
#[derive(Clone)]
pub struct SessionManager {
    backend: Arc<dyn Backend>,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(backend: Arc<dyn Backend>, store: Arc<dyn SessionStore>) -> Self {
        Self { backend, store }
    }

    /// `POST /login` and persist the response under `currentUser`.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let session = self.backend.login(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Login failed");
            ClientError::LoginRejected(e)
        })?;

        let payload =
            serde_json::to_string(&session).map_err(|e| ClientError::Session(e.to_string()))?;
        self.store
            .set(CURRENT_USER_KEY, &payload)
            .await
            .map_err(|e| ClientError::Session(e.to_string()))?;

        tracing::info!(user_id = session.user_id(), "Logged in");
        Ok(session)
    }

    /// The persisted session, or `NotAuthenticated` when there is none.
    pub async fn current(&self) -> Result<Session, ClientError> {
        let raw = self
            .store
            .get(CURRENT_USER_KEY)
            .await
            .map_err(|e| ClientError::Session(e.to_string()))?
            .ok_or(ClientError::NotAuthenticated)?;

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Discarding unreadable session snapshot");
            ClientError::NotAuthenticated
        })
    }

    pub async fn current_user_id(&self) -> Result<UserId, ClientError> {
        self.current().await.map(|s| s.user_id())
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.store
            .delete(CURRENT_USER_KEY)
            .await
            .map_err(|e| ClientError::Session(e.to_string()))?;
        tracing::info!("Logged out");
        Ok(())
    }
}
