//! Data Transfer Objects - request bodies sent to the backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub avatar: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub image: String,
    pub user_id: i64,
}

/// Body of `POST /posts/:id/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub user_id: i64,
    pub post_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_request_uses_backend_field_names() {
        let body = CreateCommentRequest {
            content: "hola".to_string(),
            user_id: 7,
            post_id: 1,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "content": "hola", "userId": 7, "postId": 1 })
        );
    }

    #[test]
    fn test_post_request_uses_backend_field_names() {
        let body = CreatePostRequest {
            title: "A".to_string(),
            content: "B".to_string(),
            image: String::new(),
            user_id: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["image"], "");
    }
}
