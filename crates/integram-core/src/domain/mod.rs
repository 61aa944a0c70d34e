//! Domain entities - the records served by the backend and their enriched forms.

mod comment;
mod post;
mod session;
mod timestamp;
mod user;

pub use comment::{Comment, EnrichedComment};
pub use post::{EnrichedPost, Post};
pub use session::Session;
pub use timestamp::parse_created;
pub use user::{Author, User};

pub type UserId = i64;
pub type PostId = i64;
pub type CommentId = i64;
