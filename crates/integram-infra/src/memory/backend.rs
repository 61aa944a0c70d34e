//! In-memory backend with the REST API's validation rules and status codes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use integram_core::BackendError;
use integram_core::domain::{Comment, Post, PostId, Session, User, UserId};
use integram_core::ports::Backend;
use integram_shared::dto::{
    CreateCommentRequest, CreatePostRequest, CreateUserRequest, LoginRequest,
};

use super::sample;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize, Deserialize)]
struct StoredUser {
    user: User,
    password: String,
}

#[derive(Default, Serialize, Deserialize)]
pub(super) struct Store {
    users: Vec<StoredUser>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Store {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().map(|s| &s.user).find(|u| u.id == id)
    }

    fn has_post(&self, id: PostId) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }

    fn insert_user(&mut self, username: &str, password: &str, avatar: String) -> User {
        let user = User {
            id: self.users.len() as UserId + 1,
            username: username.to_string(),
            avatar: Some(avatar),
            created: Some(now()),
        };
        self.users.push(StoredUser {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    fn insert_post(&mut self, title: &str, content: &str, image: String, user_id: UserId) -> Post {
        let post = Post {
            id: self.posts.len() as PostId + 1,
            title: title.to_string(),
            content: content.to_string(),
            image: Some(image),
            user_id,
            created: now(),
        };
        self.posts.push(post.clone());
        post
    }

    fn insert_comment(&mut self, content: &str, user_id: UserId, post_id: PostId) -> Comment {
        let comment = Comment {
            id: self.comments.len() as i64 + 1,
            content: content.to_string(),
            user_id,
            post_id,
            created: now(),
        };
        self.comments.push(comment.clone());
        comment
    }
}

fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Backend held entirely in memory.
///
/// Ids are sequential from 1 per collection. Data is lost when dropped unless
/// saved with [`InMemoryBackend::save`].
#[derive(Default)]
pub struct InMemoryBackend {
    pub(super) store: RwLock<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        Ok(self.store.read().await.posts.clone())
    }

    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, BackendError> {
        let store = self.store.read().await;
        Ok(store
            .posts
            .iter()
            .filter(|p| title.is_empty() || p.title.contains(title))
            .cloned()
            .collect())
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, BackendError> {
        if request.content.is_empty() {
            return Err(BackendError::bad_request("missing parameter: content"));
        }

        let mut store = self.store.write().await;
        if store.user(request.user_id).is_none() {
            return Err(BackendError::not_found(format!(
                "user with id {} does not exist",
                request.user_id
            )));
        }

        let post = store.insert_post(
            &request.title,
            &request.content,
            request.image.clone(),
            request.user_id,
        );
        tracing::debug!(post_id = post.id, "Stored post");
        Ok(post)
    }

    async fn get_user(&self, id: UserId) -> Result<User, BackendError> {
        self.store
            .read()
            .await
            .user(id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("User not found"))
    }

    async fn search_users(&self, name: &str) -> Result<Vec<User>, BackendError> {
        let store = self.store.read().await;
        let users: Vec<User> = store
            .users
            .iter()
            .map(|s| &s.user)
            .filter(|u| name.is_empty() || u.username == name)
            .cloned()
            .collect();

        if !name.is_empty() && users.is_empty() {
            return Err(BackendError::not_found("User not found"));
        }
        Ok(users)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, BackendError> {
        if request.username.is_empty() {
            return Err(BackendError::bad_request("missing parameter: username"));
        }

        let mut store = self.store.write().await;
        if store
            .users
            .iter()
            .any(|s| s.user.username == request.username)
        {
            return Err(BackendError::bad_request("Username already exists"));
        }
        if request.password.chars().count() < 6 {
            return Err(BackendError::bad_request(format!(
                "invalid password {}",
                request.password
            )));
        }

        let user = store.insert_user(&request.username, &request.password, request.avatar.clone());
        tracing::debug!(user_id = user.id, "Stored user");
        Ok(user)
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, BackendError> {
        if request.username.is_empty() {
            return Err(BackendError::bad_request("missing parameter: username"));
        }
        if request.password.is_empty() {
            return Err(BackendError::bad_request("missing parameter: password"));
        }

        let store = self.store.read().await;
        store
            .users
            .iter()
            .find(|s| s.user.username == request.username && s.password == request.password)
            .map(|s| Session {
                user: s.user.clone(),
            })
            .ok_or_else(|| BackendError::bad_request("incorrect email or password"))
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, BackendError> {
        let store = self.store.read().await;
        if !store.has_post(post_id) {
            return Err(BackendError::not_found("Post not found"));
        }
        Ok(store
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        post_id: PostId,
        request: &CreateCommentRequest,
    ) -> Result<Comment, BackendError> {
        if request.content.is_empty() {
            return Err(BackendError::bad_request("missing parameter: content"));
        }

        let mut store = self.store.write().await;
        if !store.has_post(post_id) {
            return Err(BackendError::not_found(format!(
                "post with id {post_id} not found"
            )));
        }
        if store.user(request.user_id).is_none() {
            return Err(BackendError::not_found(format!(
                "user with id {} not found",
                request.user_id
            )));
        }

        Ok(store.insert_comment(&request.content, request.user_id, post_id))
    }

    async fn reset(&self) -> Result<(), BackendError> {
        *self.store.write().await = Store::default();
        tracing::info!("In-memory backend reset");
        Ok(())
    }

    async fn populate(&self) -> Result<(), BackendError> {
        let mut store = self.store.write().await;
        *store = Store::default();

        let author_ids: Vec<UserId> = sample::USERNAMES
            .iter()
            .map(|username| {
                store
                    .insert_user(username, sample::PASSWORD, sample::avatar_for(username))
                    .id
            })
            .collect();

        for (u, &user_id) in author_ids.iter().enumerate() {
            for k in 0..sample::POSTS_PER_USER {
                let n = u * sample::POSTS_PER_USER + k;
                let title = sample::TITLES[(u + k) % sample::TITLES.len()];
                let content = sample::DESCRIPTIONS[n % sample::DESCRIPTIONS.len()];
                let post = store.insert_post(title, content, sample::image_for(n), user_id);

                for c in 0..sample::COMMENTS_PER_POST {
                    let commenter = author_ids[(n + c) % author_ids.len()];
                    let text = sample::COMMENTS[(n * 3 + c) % sample::COMMENTS.len()];
                    store.insert_comment(text, commenter, post.id);
                }
            }
        }

        tracing::info!(
            users = store.users.len(),
            posts = store.posts.len(),
            comments = store.comments.len(),
            "In-memory backend populated"
        );
        Ok(())
    }
}
