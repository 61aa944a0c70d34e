//! # Integram Shared
//!
//! Wire types exchanged with the Integram REST backend.
//! Field names follow the backend's JSON (`userId`, `postId`).

pub mod dto;
pub mod response;

pub use response::ErrorBody;
