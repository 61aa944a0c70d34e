//! Command-line interface definition.

use clap::{Parser, Subcommand};

use integram_core::domain::{PostId, UserId};

#[derive(Debug, Parser)]
#[command(name = "integram", version, about = "Client for the Integram social network")]
pub struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wipe every user, post and comment on the backend.
    Reset,
    /// Load the backend's sample data set.
    Populate,
    /// Create an account.
    Register {
        username: String,
        password: String,
        /// Avatar image URL.
        #[arg(long, default_value = "")]
        avatar: String,
    },
    /// Log in and remember the user for later commands.
    Login { username: String, password: String },
    /// Forget the logged-in user.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Show every post, newest first, with comments.
    Feed,
    /// Show a user's profile and their posts.
    Profile { user_id: UserId },
    /// Publish a post as the logged-in user.
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Image URL.
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Comment on a post as the logged-in user.
    Comment { post_id: PostId, text: String },
    /// Find posts by exact title, ignoring case.
    SearchPosts { term: String },
    /// Find users by name.
    SearchUsers { term: String },
}
