use serde::{Deserialize, Serialize};

use super::UserId;

/// User record as returned by `GET /users/:id`.
///
/// The password is write-only and never part of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl User {
    /// The display fields merged into posts and comments.
    pub fn author(&self) -> Author {
        Author {
            username: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl From<User> for Author {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            avatar: user.avatar,
        }
    }
}

/// Denormalized author fields attached to a post or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
