//! Scriptable backend used by the service tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use integram_shared::dto::{
    CreateCommentRequest, CreatePostRequest, CreateUserRequest, LoginRequest,
};

use crate::domain::{Comment, Post, PostId, Session, User, UserId};
use crate::error::BackendError;
use crate::ports::Backend;

#[derive(Default)]
struct StubData {
    posts: Vec<Post>,
    users: HashMap<UserId, User>,
    comments: HashMap<PostId, Vec<Comment>>,
    next_id: i64,
}

#[derive(Default)]
pub struct StubBackend {
    data: Mutex<StubData>,
    pub fail_posts: bool,
    pub failing_users: HashSet<UserId>,
    pub failing_comment_lists: HashSet<PostId>,
    pub reject_writes: bool,
    pub calls: Mutex<Vec<String>>,
}

pub fn user(id: UserId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        avatar: Some(format!("https://avatars/{username}.png")),
        created: None,
    }
}

pub fn post(id: PostId, title: &str, user_id: UserId, created: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: format!("content of {title}"),
        image: None,
        user_id,
        created: created.to_string(),
    }
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: UserId, username: &str) -> Self {
        self.data.lock().unwrap().users.insert(id, user(id, username));
        self
    }

    pub fn with_post(self, id: PostId, title: &str, user_id: UserId, created: &str) -> Self {
        self.data
            .lock()
            .unwrap()
            .posts
            .push(post(id, title, user_id, created));
        self
    }

    pub fn with_comment(self, id: i64, post_id: PostId, user_id: UserId, content: &str) -> Self {
        self.data
            .lock()
            .unwrap()
            .comments
            .entry(post_id)
            .or_default()
            .push(Comment {
                id,
                content: content.to_string(),
                user_id,
                post_id,
                created: "2024-01-01T00:00:00".to_string(),
            });
        self
    }

    pub fn failing_user(mut self, id: UserId) -> Self {
        self.failing_users.insert(id);
        self
    }

    pub fn failing_comments(mut self, post_id: PostId) -> Self {
        self.failing_comment_lists.insert(post_id);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_write(&self) -> Result<(), BackendError> {
        if self.reject_writes {
            Err(BackendError::bad_request("missing parameter: content"))
        } else {
            Ok(())
        }
    }

    fn next_id(&self) -> i64 {
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        1000 + data.next_id
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.record("GET /posts".to_string());
        if self.fail_posts {
            return Err(BackendError::status(503, None));
        }
        Ok(self.data.lock().unwrap().posts.clone())
    }

    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, BackendError> {
        self.record(format!("GET /posts?title={title}"));
        if self.fail_posts {
            return Err(BackendError::status(503, None));
        }
        let data = self.data.lock().unwrap();
        Ok(data
            .posts
            .iter()
            .filter(|p| p.title.contains(title))
            .cloned()
            .collect())
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, BackendError> {
        self.record("POST /posts".to_string());
        self.check_write()?;
        let id = self.next_id();
        let post = Post {
            id,
            title: request.title.clone(),
            content: request.content.clone(),
            image: Some(request.image.clone()),
            user_id: request.user_id,
            created: "2030-01-01T00:00:00".to_string(),
        };
        self.data.lock().unwrap().posts.push(post.clone());
        Ok(post)
    }

    async fn get_user(&self, id: UserId) -> Result<User, BackendError> {
        self.record(format!("GET /users/{id}"));
        if self.failing_users.contains(&id) {
            return Err(BackendError::status(500, None));
        }
        self.data
            .lock()
            .unwrap()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("User not found"))
    }

    async fn search_users(&self, name: &str) -> Result<Vec<User>, BackendError> {
        self.record(format!("GET /users?name={name}"));
        let found: Vec<User> = self
            .data
            .lock()
            .unwrap()
            .users
            .values()
            .filter(|u| u.username == name)
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(BackendError::not_found("User not found"));
        }
        Ok(found)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, BackendError> {
        self.record("POST /users".to_string());
        self.check_write()?;
        let id = self.next_id();
        let user = User {
            id,
            username: request.username.clone(),
            avatar: Some(request.avatar.clone()),
            created: None,
        };
        self.data.lock().unwrap().users.insert(id, user.clone());
        Ok(user)
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, BackendError> {
        self.record("POST /login".to_string());
        let data = self.data.lock().unwrap();
        data.users
            .values()
            .find(|u| u.username == request.username && request.password == "password")
            .map(|u| Session { user: u.clone() })
            .ok_or_else(|| BackendError::bad_request("incorrect email or password"))
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, BackendError> {
        self.record(format!("GET /posts/{post_id}/comments"));
        if self.failing_comment_lists.contains(&post_id) {
            return Err(BackendError::status(500, None));
        }
        Ok(self
            .data
            .lock()
            .unwrap()
            .comments
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_comment(
        &self,
        post_id: PostId,
        request: &CreateCommentRequest,
    ) -> Result<Comment, BackendError> {
        self.record(format!("POST /posts/{post_id}/comments"));
        self.check_write()?;
        let comment = Comment {
            id: self.next_id(),
            content: request.content.clone(),
            user_id: request.user_id,
            post_id: request.post_id,
            created: "2030-01-01 00:00:00".to_string(),
        };
        self.data
            .lock()
            .unwrap()
            .comments
            .entry(post_id)
            .or_default()
            .push(comment.clone());
        Ok(comment)
    }

    async fn reset(&self) -> Result<(), BackendError> {
        self.record("POST /reset".to_string());
        self.check_write()?;
        let mut data = self.data.lock().unwrap();
        data.posts.clear();
        data.users.clear();
        data.comments.clear();
        Ok(())
    }

    async fn populate(&self) -> Result<(), BackendError> {
        self.record("POST /populate".to_string());
        self.check_write()
    }
}
