//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod backend;
mod session_store;

pub use backend::Backend;
pub use session_store::{CURRENT_USER_KEY, SessionStore, SessionStoreError};
