use serde::{Deserialize, Serialize};

use super::{User, UserId};

/// Login response payload, persisted verbatim as the local session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
