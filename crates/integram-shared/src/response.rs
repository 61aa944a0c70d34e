//! Error payloads returned by the backend.

use serde::{Deserialize, Serialize};

/// Error body sent with non-2xx responses, e.g. `{"detail": "User not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    /// Extract the `detail` message from a raw response body, if it has one.
    pub fn parse_detail(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail() {
        assert_eq!(
            ErrorBody::parse_detail(r#"{"detail":"User not found"}"#),
            Some("User not found".to_string())
        );
        assert_eq!(ErrorBody::parse_detail("Internal Server Error"), None);
    }
}
