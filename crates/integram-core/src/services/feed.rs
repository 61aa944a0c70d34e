//! Feed assembly: posts, their authors, and their enriched comments.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    Author, Comment, EnrichedComment, EnrichedPost, Post, PostId, User, UserId,
};
use crate::error::ClientError;
use crate::ports::Backend;

use super::fanout::{DEFAULT_CONCURRENCY, ordered_map};

/// Which posts a feed load keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedScope {
    /// Every post, as on the home page.
    #[default]
    All,
    /// Only posts authored by this user, as on a profile page.
    User(UserId),
}

impl FeedScope {
    fn includes(&self, post: &Post) -> bool {
        match self {
            FeedScope::All => true,
            FeedScope::User(id) => post.user_id == *id,
        }
    }
}

/// Result of a feed load.
///
/// Every post in `posts` has an entry in `comments`, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPage {
    pub posts: Vec<EnrichedPost>,
    pub comments: HashMap<PostId, Vec<EnrichedComment>>,
}

impl FeedPage {
    pub fn comments_for(&self, post_id: PostId) -> &[EnrichedComment] {
        self.comments
            .get(&post_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A user's profile with the feed of their own posts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub user: User,
    pub feed: FeedPage,
}

/// Input buffers of the post composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: String,
}

impl PostDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// In-memory state of a feed page: loaded posts, comments and input drafts.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub page: FeedPage,
    pub comment_drafts: HashMap<PostId, String>,
    pub post_draft: PostDraft,
}

impl FeedState {
    pub fn new(page: FeedPage) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn set_comment_draft(&mut self, post_id: PostId, text: impl Into<String>) {
        self.comment_drafts.insert(post_id, text.into());
    }

    pub fn comment_draft(&self, post_id: PostId) -> &str {
        self.comment_drafts
            .get(&post_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Append one comment to a post's sequence and clear that post's draft.
    pub(crate) fn append_comment(&mut self, post_id: PostId, comment: EnrichedComment) {
        self.page.comments.entry(post_id).or_default().push(comment);
        self.comment_drafts.insert(post_id, String::new());
    }
}

/// Look up a user and turn them into display fields.
pub(crate) async fn fetch_author(
    backend: &dyn Backend,
    entity: &'static str,
    user_id: UserId,
) -> Result<Author, ClientError> {
    backend
        .get_user(user_id)
        .await
        .map(Author::from)
        .map_err(|source| ClientError::Enrichment {
            entity,
            user_id,
            source,
        })
}

/// Same as [`fetch_author`], but failures only degrade the record.
async fn author_or_none(
    backend: &dyn Backend,
    entity: &'static str,
    user_id: UserId,
) -> Option<Author> {
    match fetch_author(backend, entity, user_id).await {
        Ok(author) => Some(author),
        Err(e) => {
            tracing::warn!(error = %e, "Author lookup failed, keeping record without author");
            None
        }
    }
}

/// Newest first. Stable, so equal timestamps keep backend order; unparseable
/// timestamps go last.
pub fn sort_newest_first(posts: &mut [EnrichedPost]) {
    posts.sort_by(|a, b| b.post.created_at().cmp(&a.post.created_at()));
}

/// Loads and enriches feeds from a [`Backend`].
#[derive(Clone)]
pub struct FeedLoader {
    backend: Arc<dyn Backend>,
    concurrency: usize,
}

impl FeedLoader {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Cap the number of concurrent author lookups per fan-out.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Load the home feed: all posts, newest first, with enriched comments.
    ///
    /// Only a failed `GET /posts` is fatal; author and comment lookups degrade.
    pub async fn load_feed(&self) -> Result<FeedPage, ClientError> {
        self.load(FeedScope::All).await
    }

    /// Load a user's profile and the feed of their posts.
    pub async fn load_profile(&self, user_id: UserId) -> Result<ProfilePage, ClientError> {
        let user = self.backend.get_user(user_id).await.map_err(|e| {
            tracing::error!(user_id, error = %e, "Failed to fetch profile");
            ClientError::BackendUnavailable(e)
        })?;
        let feed = self.load(FeedScope::User(user_id)).await?;
        Ok(ProfilePage { user, feed })
    }

    pub async fn load(&self, scope: FeedScope) -> Result<FeedPage, ClientError> {
        let posts = self.backend.list_posts().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch posts");
            ClientError::BackendUnavailable(e)
        })?;

        let posts: Vec<Post> = posts.into_iter().filter(|p| scope.includes(p)).collect();
        tracing::debug!(count = posts.len(), ?scope, "Fetched posts");

        let mut posts = self.resolve_post_authors(posts).await;
        sort_newest_first(&mut posts);

        let mut comments = HashMap::with_capacity(posts.len());
        for post in &posts {
            let enriched = self.load_comments(post.id()).await;
            comments.insert(post.id(), enriched);
        }

        Ok(FeedPage { posts, comments })
    }

    async fn resolve_post_authors(&self, posts: Vec<Post>) -> Vec<EnrichedPost> {
        let backend = self.backend.as_ref();
        ordered_map(posts, self.concurrency, |post| async move {
            let author = author_or_none(backend, "post", post.user_id).await;
            EnrichedPost::new(post, author)
        })
        .await
    }

    /// Comments of one post with their authors. A failed list yields no comments.
    async fn load_comments(&self, post_id: PostId) -> Vec<EnrichedComment> {
        let comments = match self.backend.list_comments(post_id).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(post_id, error = %e, "Failed to fetch comments");
                return Vec::new();
            }
        };
        self.resolve_comment_authors(comments).await
    }

    async fn resolve_comment_authors(&self, comments: Vec<Comment>) -> Vec<EnrichedComment> {
        let backend = self.backend.as_ref();
        ordered_map(comments, self.concurrency, |comment| async move {
            let author = author_or_none(backend, "comment", comment.user_id).await;
            EnrichedComment::new(comment, author)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubBackend;

    fn loader(backend: StubBackend) -> FeedLoader {
        FeedLoader::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_end_to_end_single_post() {
        let backend = StubBackend::new()
            .with_user(7, "bob")
            .with_post(1, "A", 7, "2024-01-01");

        let page = loader(backend).load_feed().await.unwrap();

        assert_eq!(page.posts.len(), 1);
        let json = serde_json::to_value(&page.posts[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "A");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["username"], "bob");
        assert!(page.comments_for(1).is_empty());
    }

    #[tokio::test]
    async fn test_sorts_newest_first_and_keeps_ties_in_order() {
        let backend = StubBackend::new()
            .with_user(1, "ana")
            .with_post(1, "old", 1, "2024-01-01 10:00:00")
            .with_post(2, "tie-a", 1, "2024-02-01T09:00:00")
            .with_post(3, "new", 1, "2024-03-01T09:00:00")
            .with_post(4, "tie-b", 1, "2024-02-01 09:00:00")
            .with_post(5, "broken", 1, "not a date");

        let page = loader(backend).load_feed().await.unwrap();
        let ids: Vec<PostId> = page.posts.iter().map(EnrichedPost::id).collect();

        assert_eq!(ids, vec![3, 2, 4, 1, 5]);
    }

    #[tokio::test]
    async fn test_author_failure_keeps_post() {
        let backend = StubBackend::new()
            .with_user(1, "ana")
            .with_user(2, "bob")
            .with_post(1, "A", 1, "2024-01-02")
            .with_post(2, "B", 2, "2024-01-01")
            .with_post(3, "C", 99, "2024-01-03")
            .failing_user(2);

        let page = loader(backend).load_feed().await.unwrap();

        assert_eq!(page.posts.len(), 3);
        let by_id = |id| page.posts.iter().find(|p| p.id() == id).unwrap();
        assert_eq!(by_id(1).username(), Some("ana"));
        assert_eq!(by_id(2).author, None);
        assert_eq!(by_id(3).author, None);
    }

    #[tokio::test]
    async fn test_post_fetch_failure_is_fatal() {
        let mut backend = StubBackend::new().with_post(1, "A", 1, "2024-01-01");
        backend.fail_posts = true;

        let err = loader(backend).load_feed().await.unwrap_err();

        assert!(matches!(err, ClientError::BackendUnavailable(_)));
    }

    #[tokio::test]
    async fn test_comments_are_enriched_in_order() {
        let backend = StubBackend::new()
            .with_user(1, "ana")
            .with_user(2, "bob")
            .with_post(10, "A", 1, "2024-01-01")
            .with_comment(1, 10, 2, "first")
            .with_comment(2, 10, 3, "second")
            .with_comment(3, 10, 1, "third");

        let page = loader(backend).with_concurrency(2).load_feed().await.unwrap();
        let comments = page.comments_for(10);

        let contents: Vec<&str> = comments.iter().map(|c| c.comment.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(comments[0].username(), Some("bob"));
        assert_eq!(comments[1].author, None);
        assert_eq!(comments[2].username(), Some("ana"));
    }

    #[tokio::test]
    async fn test_comment_list_failure_yields_empty_sequence() {
        let backend = StubBackend::new()
            .with_user(1, "ana")
            .with_post(1, "A", 1, "2024-01-02")
            .with_post(2, "B", 1, "2024-01-01")
            .with_comment(1, 2, 1, "still here")
            .failing_comments(1);

        let page = loader(backend).load_feed().await.unwrap();

        assert_eq!(page.posts.len(), 2);
        assert!(page.comments.contains_key(&1));
        assert!(page.comments_for(1).is_empty());
        assert_eq!(page.comments_for(2).len(), 1);
    }

    #[tokio::test]
    async fn test_comments_fetched_in_feed_order() {
        let backend = Arc::new(
            StubBackend::new()
                .with_user(1, "ana")
                .with_post(1, "old", 1, "2024-01-01")
                .with_post(2, "new", 1, "2024-01-02"),
        );

        FeedLoader::new(backend.clone()).load_feed().await.unwrap();

        let comment_calls: Vec<String> = backend
            .calls()
            .into_iter()
            .filter(|c| c.ends_with("/comments"))
            .collect();
        assert_eq!(
            comment_calls,
            vec!["GET /posts/2/comments", "GET /posts/1/comments"]
        );
    }

    #[tokio::test]
    async fn test_profile_only_contains_user_posts() {
        let backend = StubBackend::new()
            .with_user(1, "ana")
            .with_user(2, "bob")
            .with_post(1, "A", 1, "2024-01-01")
            .with_post(2, "B", 2, "2024-01-02")
            .with_post(3, "C", 1, "2024-01-03");

        let profile = loader(backend).load_profile(1).await.unwrap();

        assert_eq!(profile.user.username, "ana");
        let ids: Vec<PostId> = profile.feed.posts.iter().map(EnrichedPost::id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_profile_of_unknown_user_fails() {
        let err = loader(StubBackend::new()).load_profile(5).await.unwrap_err();
        assert!(matches!(err, ClientError::BackendUnavailable(e) if e.is_not_found()));
    }
}
