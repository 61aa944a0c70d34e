//! reqwest-backed implementation of the `Backend` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use integram_core::BackendError;
use integram_core::domain::{Comment, Post, PostId, Session, User, UserId};
use integram_core::ports::Backend;
use integram_shared::ErrorBody;
use integram_shared::dto::{
    CreateCommentRequest, CreatePostRequest, CreateUserRequest, LoginRequest,
};

/// HTTP backend configuration.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL every endpoint path is appended to, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Some(Duration::from_secs(30)),
            system_proxy: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }
}

/// Backend talking JSON over HTTP to the Integram REST API.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a JSON body from a 2xx response.
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BackendError> {
        let response = Self::execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Send a request whose response body is irrelevant.
    async fn trigger(&self, request: RequestBuilder) -> Result<(), BackendError> {
        Self::execute(request).await.map(|_| ())
    }

    async fn execute(request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "Backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::status(
            status.as_u16(),
            ErrorBody::parse_detail(&body),
        ))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.fetch(self.client.get(self.url("/posts"))).await
    }

    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, BackendError> {
        let request = self
            .client
            .get(self.url("/posts"))
            .query(&[("title", title)]);
        self.fetch(request).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, BackendError> {
        self.fetch(self.client.post(self.url("/posts")).json(request)).await
    }

    async fn get_user(&self, id: UserId) -> Result<User, BackendError> {
        self.fetch(self.client.get(self.url(&format!("/users/{id}")))).await
    }

    async fn search_users(&self, name: &str) -> Result<Vec<User>, BackendError> {
        let request = self.client.get(self.url("/users")).query(&[("name", name)]);
        self.fetch(request).await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, BackendError> {
        self.fetch(self.client.post(self.url("/users")).json(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, BackendError> {
        self.fetch(self.client.post(self.url("/login")).json(request)).await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, BackendError> {
        self.fetch(self.client.get(self.url(&format!("/posts/{post_id}/comments")))).await
    }

    async fn create_comment(
        &self,
        post_id: PostId,
        request: &CreateCommentRequest,
    ) -> Result<Comment, BackendError> {
        self.fetch(
            self.client
                .post(self.url(&format!("/posts/{post_id}/comments")))
                .json(request),
        )
        .await
    }

    async fn reset(&self) -> Result<(), BackendError> {
        self.trigger(self.client.post(self.url("/reset"))).await
    }

    async fn populate(&self) -> Result<(), BackendError> {
        self.trigger(self.client.post(self.url("/populate"))).await
    }
}
