//! Client-level error types.

use thiserror::Error;

use crate::domain::{PostId, UserId};

/// Errors raised by a [`Backend`](crate::ports::Backend) implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status {status}{}", describe_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),
}

fn describe_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl BackendError {
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::status(404, Some(detail.into()))
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::status(400, Some(detail.into()))
    }

    /// True when the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Service errors - what callers of the feed, composer and search services see.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A primary resource could not be fetched.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(#[source] BackendError),

    /// A secondary author lookup failed. Never fatal to a feed load.
    #[error("Could not resolve {entity} author {user_id}: {source}")]
    Enrichment {
        entity: &'static str,
        user_id: UserId,
        #[source]
        source: BackendError,
    },

    #[error("Comment on post {post_id} rejected: {source}")]
    CommentRejected {
        post_id: PostId,
        #[source]
        source: BackendError,
    },

    #[error("Post rejected: {0}")]
    PostRejected(#[source] BackendError),

    #[error("Registration rejected: {0}")]
    RegistrationRejected(#[source] BackendError),

    #[error("Login rejected: {0}")]
    LoginRejected(#[source] BackendError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session storage error: {0}")]
    Session(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_detail() {
        let err = BackendError::not_found("User not found");
        assert_eq!(err.to_string(), "Unexpected status 404: User not found");
        assert!(err.is_not_found());

        let err = BackendError::status(502, None);
        assert_eq!(err.to_string(), "Unexpected status 502");
        assert!(!err.is_not_found());
    }
}
