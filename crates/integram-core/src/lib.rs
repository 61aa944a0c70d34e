//! # Integram Core
//!
//! The client layer of Integram: domain records, the ports a backend and a
//! session store must implement, and the services that assemble the feed.
//! This crate performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{BackendError, ClientError};
