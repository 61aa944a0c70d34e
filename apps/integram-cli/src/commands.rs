//! Command handlers.

use serde_json::json;

use integram_core::services::{FeedState, SearchState};

use crate::cli::Command;
use crate::render;
use crate::state::AppState;

/// Run one command, save local data and print the result to stdout.
pub async fn run(command: Command, state: &AppState, as_json: bool) -> anyhow::Result<()> {
    let output = execute(command, state, as_json).await?;
    state.persist().await?;
    print!("{output}");
    Ok(())
}

/// Run one command and return what it would print.
pub async fn execute(command: Command, state: &AppState, as_json: bool) -> anyhow::Result<String> {
    let output = match command {
        Command::Reset => {
            let status = state.maintenance.reset_database().await?;
            emit(as_json, json!({ "status": status.to_string() }), format!("{status}\n"))
        }
        Command::Populate => {
            let status = state.maintenance.populate_database().await?;
            emit(as_json, json!({ "status": status.to_string() }), format!("{status}\n"))
        }
        Command::Register {
            username,
            password,
            avatar,
        } => {
            let user = state.accounts.register(&username, &password, &avatar).await?;
            emit(as_json, json!(user), format!("Registered {}", render::user(&user)))
        }
        Command::Login { username, password } => {
            let session = state.sessions.login(&username, &password).await?;
            emit(
                as_json,
                json!(session),
                format!("Logged in as {}", render::user(&session.user)),
            )
        }
        Command::Logout => {
            state.sessions.logout().await?;
            emit(as_json, json!({ "status": "Logged out" }), "Logged out\n".to_string())
        }
        Command::Whoami => {
            let session = state.sessions.current().await?;
            emit(as_json, json!(session.user), render::user(&session.user))
        }
        Command::Feed => {
            let page = state.feed.load_feed().await?;
            emit(
                as_json,
                json!({ "posts": page.posts, "comments": page.comments }),
                render::feed(&page),
            )
        }
        Command::Profile { user_id } => {
            let profile = state.feed.load_profile(user_id).await?;
            emit(
                as_json,
                json!({
                    "user": profile.user,
                    "posts": profile.feed.posts,
                    "comments": profile.feed.comments,
                }),
                render::profile(&profile),
            )
        }
        Command::Post {
            title,
            content,
            image,
        } => {
            let session = state.sessions.current().await?;
            let mut feed = FeedState::default();
            feed.post_draft.title = title;
            feed.post_draft.content = content;
            feed.post_draft.image = image;

            let post = state.posts.create_post(&mut feed, &session).await?;
            emit(
                as_json,
                json!(post),
                format!("Created post [{}] {}\n", post.id, post.title),
            )
        }
        Command::Comment { post_id, text } => {
            let session = state.sessions.current().await?;
            let mut feed = FeedState::new(state.feed.load_feed().await?);
            feed.set_comment_draft(post_id, text);

            let comment = state
                .comments
                .submit_draft(&mut feed, &session, post_id)
                .await?;
            let thread = feed
                .page
                .posts
                .iter()
                .find(|p| p.id() == post_id)
                .map(|p| render::post(p, feed.page.comments_for(post_id)))
                .unwrap_or_else(|| render::comment(&comment));
            emit(as_json, json!(comment), thread)
        }
        Command::SearchPosts { term } => {
            let mut search = SearchState::default();
            state.search.search_posts_into(&mut search, &term).await?;
            emit(
                as_json,
                json!(search.posts.results()),
                render::post_results(&search.posts),
            )
        }
        Command::SearchUsers { term } => {
            let mut search = SearchState::default();
            state.search.search_users_into(&mut search, &term).await?;
            emit(
                as_json,
                json!(search.users.results()),
                render::user_results(&search.users),
            )
        }
    };

    Ok(output)
}

fn emit(as_json: bool, value: serde_json::Value, text: String) -> String {
    if as_json {
        format!("{value:#}\n")
    } else {
        text
    }
}
