//! Comment and post composers.

use std::sync::Arc;

use integram_shared::dto::{CreateCommentRequest, CreatePostRequest};

use crate::domain::{EnrichedComment, Post, PostId, Session, UserId};
use crate::error::ClientError;
use crate::ports::Backend;

use super::feed::{FeedLoader, FeedState, fetch_author};

/// Posts new comments and merges them into the local feed state.
#[derive(Clone)]
pub struct CommentComposer {
    backend: Arc<dyn Backend>,
}

impl CommentComposer {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Post `text` on `post_id` as `author_id` and resolve the author.
    ///
    /// Empty text is sent as-is; the backend decides whether to reject it.
    pub async fn submit(
        &self,
        post_id: PostId,
        text: &str,
        author_id: UserId,
    ) -> Result<EnrichedComment, ClientError> {
        let request = CreateCommentRequest {
            content: text.to_string(),
            user_id: author_id,
            post_id,
        };

        let comment = self
            .backend
            .create_comment(post_id, &request)
            .await
            .map_err(|source| {
                tracing::error!(post_id, error = %source, "Comment rejected");
                ClientError::CommentRejected { post_id, source }
            })?;

        let author = match fetch_author(self.backend.as_ref(), "comment", author_id).await {
            Ok(author) => Some(author),
            Err(e) => {
                tracing::warn!(error = %e, "Posted comment without author fields");
                None
            }
        };

        tracing::debug!(post_id, comment_id = comment.id, "Comment posted");
        Ok(EnrichedComment::new(comment, author))
    }

    /// Submit the draft for `post_id` as the session's user.
    ///
    /// On success the comment is appended to that post's sequence and only that
    /// post's draft is cleared. On failure the state is untouched.
    pub async fn submit_draft(
        &self,
        state: &mut FeedState,
        session: &Session,
        post_id: PostId,
    ) -> Result<EnrichedComment, ClientError> {
        let text = state.comment_draft(post_id).to_string();
        let comment = self.submit(post_id, &text, session.user_id()).await?;
        state.append_comment(post_id, comment.clone());
        Ok(comment)
    }
}

/// Creates posts from the composer draft and refreshes the feed.
#[derive(Clone)]
pub struct PostComposer {
    backend: Arc<dyn Backend>,
    loader: FeedLoader,
}

impl PostComposer {
    pub fn new(backend: Arc<dyn Backend>, loader: FeedLoader) -> Self {
        Self { backend, loader }
    }

    /// Create a post from `state.post_draft` as the session's user.
    ///
    /// On success the draft is cleared and the feed reloaded into `state`. A
    /// failed reload is logged and leaves the previous page in place; the post
    /// itself still counts as created. On rejection the draft is kept.
    pub async fn create_post(
        &self,
        state: &mut FeedState,
        session: &Session,
    ) -> Result<Post, ClientError> {
        let draft = &state.post_draft;
        let request = CreatePostRequest {
            title: draft.title.clone(),
            content: draft.content.clone(),
            image: draft.image.clone(),
            user_id: session.user_id(),
        };

        let post = self.backend.create_post(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Post rejected");
            ClientError::PostRejected(e)
        })?;
        tracing::info!(post_id = post.id, "Post created");

        state.post_draft.clear();
        match self.loader.load_feed().await {
            Ok(page) => state.page = page,
            Err(e) => tracing::error!(error = %e, "Feed reload after post creation failed"),
        }

        Ok(post)
    }
}
