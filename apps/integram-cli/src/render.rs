//! Plain-text rendering of command results.

use std::fmt::Write;

use integram_core::domain::{EnrichedComment, EnrichedPost, Post, User};
use integram_core::services::{FeedPage, ProfilePage, SearchOutcome};

const UNKNOWN_AUTHOR: &str = "unknown";

pub fn post(post: &EnrichedPost, comments: &[EnrichedComment]) -> String {
    let mut out = String::new();
    let p = &post.post;
    let _ = writeln!(
        out,
        "[{}] {} - {} - {}",
        p.id,
        p.title,
        post.username().unwrap_or(UNKNOWN_AUTHOR),
        p.created
    );
    let _ = writeln!(out, "    {}", p.content);
    if let Some(image) = p.image.as_deref().filter(|i| !i.is_empty()) {
        let _ = writeln!(out, "    image: {image}");
    }
    for c in comments {
        out.push_str(&comment(c));
    }
    out
}

pub fn comment(comment: &EnrichedComment) -> String {
    format!(
        "    > {}: {}\n",
        comment.username().unwrap_or(UNKNOWN_AUTHOR),
        comment.comment.content
    )
}

pub fn feed(page: &FeedPage) -> String {
    if page.posts.is_empty() {
        return "No posts yet.\n".to_string();
    }
    page.posts
        .iter()
        .map(|p| post(p, page.comments_for(p.id())))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn user(user: &User) -> String {
    match user.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(avatar) => format!("#{} {} ({avatar})\n", user.id, user.username),
        None => format!("#{} {}\n", user.id, user.username),
    }
}

pub fn profile(profile: &ProfilePage) -> String {
    format!("{}\n{}", user(&profile.user), feed(&profile.feed))
}

pub fn post_results(outcome: &SearchOutcome<Post>) -> String {
    match outcome {
        SearchOutcome::NotSearched => String::new(),
        SearchOutcome::NoResults => "No posts found.\n".to_string(),
        SearchOutcome::Found(posts) => posts
            .iter()
            .map(|p| format!("[{}] {} - {}\n", p.id, p.title, p.created))
            .collect(),
    }
}

pub fn user_results(outcome: &SearchOutcome<User>) -> String {
    match outcome {
        SearchOutcome::NotSearched => String::new(),
        SearchOutcome::NoResults => "No users found.\n".to_string(),
        SearchOutcome::Found(users) => users.iter().map(user).collect(),
    }
}
