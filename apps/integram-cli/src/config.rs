//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use integram_core::services::DEFAULT_CONCURRENCY;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_FILE: &str = ".integram-session.json";
const DEFAULT_DATA_FILE: &str = ".integram-data.json";

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// REST API base URL. `None` runs against an in-process backend.
    pub api_url: Option<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Maximum in-flight author lookups during a feed load.
    pub feed_concurrency: usize,
    /// Where the logged-in user is persisted between invocations.
    pub session_file: PathBuf,
    /// Where the in-process backend keeps its data when `api_url` is unset.
    pub data_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            feed_concurrency: DEFAULT_CONCURRENCY,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("INTEGRAM_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        // 0 disables the timeout
        let timeout = match lookup("BACKEND_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.timeout,
        };

        Self {
            api_url,
            timeout,
            feed_concurrency: lookup("FEED_CONCURRENCY")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.feed_concurrency),
            session_file: lookup("INTEGRAM_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            data_file: lookup("INTEGRAM_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
        }
    }
}
