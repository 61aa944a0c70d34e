//! # Integram Infrastructure
//!
//! Concrete implementations of the ports defined in `integram-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network access, in-memory only
//! - `http` - REST backend over HTTP via reqwest

pub mod memory;
pub mod session;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use memory::{InMemoryBackend, SnapshotError};
pub use session::{FileSessionStore, InMemorySessionStore};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{HttpBackend, HttpBackendConfig};
