//! Services - the client's operations, written against the ports.

mod account;
mod composer;
mod fanout;
mod feed;
mod maintenance;
mod search;
mod session;

pub use account::AccountService;
pub use composer::{CommentComposer, PostComposer};
pub use fanout::{DEFAULT_CONCURRENCY, ordered_map};
pub use feed::{
    FeedLoader, FeedPage, FeedScope, FeedState, PostDraft, ProfilePage, sort_newest_first,
};
pub use maintenance::{MaintenanceService, MaintenanceStatus};
pub use search::{SearchOutcome, SearchService, SearchState};
pub use session::SessionManager;
