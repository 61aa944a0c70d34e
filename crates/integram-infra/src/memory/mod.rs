//! In-process backend - used when no backend URL is configured, and in tests.

mod backend;
mod sample;
mod snapshot;

pub use backend::InMemoryBackend;
pub use snapshot::SnapshotError;
