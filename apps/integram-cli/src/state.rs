//! Application state - backend, session store and the services built on them.

use std::path::PathBuf;
use std::sync::Arc;

use integram_core::ports::{Backend, SessionStore};
use integram_core::services::{
    AccountService, CommentComposer, FeedLoader, MaintenanceService, PostComposer, SearchService,
    SessionManager,
};
use integram_infra::{FileSessionStore, InMemoryBackend};

use crate::config::ClientConfig;

/// Everything a command needs.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub sessions: SessionManager,
    pub feed: FeedLoader,
    pub comments: CommentComposer,
    pub posts: PostComposer,
    pub search: SearchService,
    pub maintenance: MaintenanceService,
    local: Option<LocalData>,
}

/// In-process backend and the file its data is kept in between invocations.
#[derive(Clone)]
struct LocalData {
    backend: Arc<InMemoryBackend>,
    path: PathBuf,
}

impl AppState {
    /// Build the application state with the configured backend.
    ///
    /// Without an API URL the data of the in-process backend is loaded from
    /// `config.data_file`; call [`AppState::persist`] to write it back.
    pub async fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));

        if let Some(backend) = remote_backend(config)? {
            return Ok(Self::with_parts(backend, store, config.feed_concurrency));
        }

        let backend = Arc::new(InMemoryBackend::load(&config.data_file).await?);
        tracing::debug!(
            path = %config.data_file.display(),
            "INTEGRAM_API_URL not set. Using local data file."
        );

        let mut state = Self::with_parts(backend.clone(), store, config.feed_concurrency);
        state.local = Some(LocalData {
            backend,
            path: config.data_file.clone(),
        });
        Ok(state)
    }

    pub fn with_parts(
        backend: Arc<dyn Backend>,
        store: Arc<dyn SessionStore>,
        feed_concurrency: usize,
    ) -> Self {
        let feed = FeedLoader::new(backend.clone()).with_concurrency(feed_concurrency);

        Self {
            accounts: AccountService::new(backend.clone()),
            sessions: SessionManager::new(backend.clone(), store),
            comments: CommentComposer::new(backend.clone()),
            posts: PostComposer::new(backend.clone(), feed.clone()),
            search: SearchService::new(backend.clone()),
            maintenance: MaintenanceService::new(backend),
            feed,
            local: None,
        }
    }

    /// Save the in-process backend's data. No-op against a remote backend.
    pub async fn persist(&self) -> anyhow::Result<()> {
        if let Some(local) = &self.local {
            local.backend.save(&local.path).await?;
        }
        Ok(())
    }
}

#[cfg(feature = "http")]
fn remote_backend(config: &ClientConfig) -> anyhow::Result<Option<Arc<dyn Backend>>> {
    use integram_infra::{HttpBackend, HttpBackendConfig};

    let Some(url) = &config.api_url else {
        return Ok(None);
    };
    let backend =
        HttpBackend::new(HttpBackendConfig::new(url.clone()).with_timeout(config.timeout))?;
    tracing::info!(base_url = backend.base_url(), "Using REST backend");
    Ok(Some(Arc::new(backend)))
}

#[cfg(not(feature = "http"))]
fn remote_backend(config: &ClientConfig) -> anyhow::Result<Option<Arc<dyn Backend>>> {
    if config.api_url.is_some() {
        tracing::warn!("Built without the http feature - ignoring INTEGRAM_API_URL");
    }
    Ok(None)
}
