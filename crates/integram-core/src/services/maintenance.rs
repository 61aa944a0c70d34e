//! Administrative triggers for the backend's maintenance endpoints.

use std::fmt;
use std::sync::Arc;

use crate::error::ClientError;
use crate::ports::Backend;

/// Status message shown after a successful maintenance call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Reset,
    Populated,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceStatus::Reset => write!(f, "Database reset"),
            MaintenanceStatus::Populated => write!(f, "Database populated"),
        }
    }
}

#[derive(Clone)]
pub struct MaintenanceService {
    backend: Arc<dyn Backend>,
}

impl MaintenanceService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// `POST /reset` - wipe users, posts and comments.
    pub async fn reset_database(&self) -> Result<MaintenanceStatus, ClientError> {
        self.backend.reset().await.map_err(|e| {
            tracing::error!(error = %e, "Database reset failed");
            ClientError::BackendUnavailable(e)
        })?;
        tracing::info!("Database reset");
        Ok(MaintenanceStatus::Reset)
    }

    /// `POST /populate` - fill the backend with sample data.
    pub async fn populate_database(&self) -> Result<MaintenanceStatus, ClientError> {
        self.backend.populate().await.map_err(|e| {
            tracing::error!(error = %e, "Database populate failed");
            ClientError::BackendUnavailable(e)
        })?;
        tracing::info!("Database populated");
        Ok(MaintenanceStatus::Populated)
    }
}
