use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Author, PostId, UserId, parse_created};

/// Post entity - an image post as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub user_id: UserId,
    pub created: String,
}

impl Post {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_created(&self.created)
    }
}

/// A post with its author's display fields, when they could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(flatten)]
    pub author: Option<Author>,
}

impl EnrichedPost {
    pub fn new(post: Post, author: Option<Author>) -> Self {
        Self { post, author }
    }

    pub fn id(&self) -> PostId {
        self.post.id
    }

    pub fn username(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: 1,
            title: "A".to_string(),
            content: "c".to_string(),
            image: None,
            user_id: 7,
            created: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_enriched_post_flattens_author() {
        let enriched = EnrichedPost::new(
            post(),
            Some(Author {
                username: "bob".to_string(),
                avatar: None,
            }),
        );
        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "A");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["username"], "bob");
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn test_unresolved_author_omits_display_fields() {
        let json = serde_json::to_value(EnrichedPost::new(post(), None)).unwrap();
        assert!(json.get("username").is_none());
        assert_eq!(json["userId"], 7);
    }

    #[test]
    fn test_deserialize_backend_post() {
        let raw = r#"{"id":3,"title":"Mi fotaza","content":"observen","image":"https://img/1.jpg","userId":2,"created":"2024-03-23T20:10:00"}"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.user_id, 2);
        assert_eq!(post.image.as_deref(), Some("https://img/1.jpg"));
        assert!(post.created_at().is_some());
    }
}
