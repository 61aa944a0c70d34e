//! REST backend over HTTP.

mod client;

pub use client::{HttpBackend, HttpBackendConfig};
