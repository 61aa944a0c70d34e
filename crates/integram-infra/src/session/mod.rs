//! Session store implementations - a JSON file on disk and in-memory fallback.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
