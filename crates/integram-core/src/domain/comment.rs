use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Author, CommentId, PostId, UserId, parse_created};

/// Comment entity - text left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub user_id: UserId,
    pub post_id: PostId,
    pub created: String,
}

impl Comment {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_created(&self.created)
    }
}

/// A comment with its author's display fields, when they could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedComment {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(flatten)]
    pub author: Option<Author>,
}

impl EnrichedComment {
    pub fn new(comment: Comment, author: Option<Author>) -> Self {
        Self { comment, author }
    }

    pub fn username(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.username.as_str())
    }
}
