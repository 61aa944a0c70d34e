//! Account registration.

use std::sync::Arc;

use integram_shared::dto::CreateUserRequest;

use crate::domain::User;
use crate::error::ClientError;
use crate::ports::Backend;

#[derive(Clone)]
pub struct AccountService {
    backend: Arc<dyn Backend>,
}

impl AccountService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// `POST /users`. Inputs are forwarded unvalidated.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        avatar: &str,
    ) -> Result<User, ClientError> {
        let request = CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            avatar: avatar.to_string(),
        };

        let user = self.backend.create_user(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Registration failed");
            ClientError::RegistrationRejected(e)
        })?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }
}
