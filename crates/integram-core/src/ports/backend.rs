//! REST backend port.

use async_trait::async_trait;
use integram_shared::dto::{
    CreateCommentRequest, CreatePostRequest, CreateUserRequest, LoginRequest,
};

use crate::domain::{Comment, Post, PostId, Session, User, UserId};
use crate::error::BackendError;

/// Backend trait - one method per consumed endpoint.
///
/// Implementations report every non-2xx answer as [`BackendError::Status`];
/// interpreting statuses (e.g. 404 on a name search) is left to the services.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError>;

    /// `GET /posts?title=<term>`
    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, BackendError>;

    /// `POST /posts`
    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, BackendError>;

    /// `GET /users/:id`
    async fn get_user(&self, id: UserId) -> Result<User, BackendError>;

    /// `GET /users?name=<term>`
    async fn search_users(&self, name: &str) -> Result<Vec<User>, BackendError>;

    /// `POST /users`
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, BackendError>;

    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<Session, BackendError>;

    /// `GET /posts/:id/comments`
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, BackendError>;

    /// `POST /posts/:id/comments`
    async fn create_comment(
        &self,
        post_id: PostId,
        request: &CreateCommentRequest,
    ) -> Result<Comment, BackendError>;

    /// `POST /reset`
    async fn reset(&self) -> Result<(), BackendError>;

    /// `POST /populate`
    async fn populate(&self) -> Result<(), BackendError>;
}
