//! Post and user lookup.

use std::sync::Arc;

use crate::domain::{Post, User};
use crate::error::ClientError;
use crate::ports::Backend;

/// Outcome of a search, distinguishing "never searched" from "nothing found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    NotSearched,
    NoResults,
    Found(Vec<T>),
}

impl<T> Default for SearchOutcome<T> {
    fn default() -> Self {
        Self::NotSearched
    }
}

impl<T> SearchOutcome<T> {
    pub fn from_results(results: Vec<T>) -> Self {
        if results.is_empty() {
            Self::NoResults
        } else {
            Self::Found(results)
        }
    }

    pub fn results(&self) -> &[T] {
        match self {
            Self::Found(results) => results,
            Self::NotSearched | Self::NoResults => &[],
        }
    }

    pub fn is_searched(&self) -> bool {
        !matches!(self, Self::NotSearched)
    }
}

/// Last outcome of each search box.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub posts: SearchOutcome<Post>,
    pub users: SearchOutcome<User>,
}

/// Search service over the backend's query endpoints.
#[derive(Clone)]
pub struct SearchService {
    backend: Arc<dyn Backend>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Posts whose title equals `term`, ignoring case.
    ///
    /// The backend's `title` query is a substring match; only exact matches are kept.
    pub async fn search_posts_by_title(
        &self,
        term: &str,
    ) -> Result<SearchOutcome<Post>, ClientError> {
        let posts = self.backend.search_posts(term).await.map_err(|e| {
            tracing::error!(term, error = %e, "Post search failed");
            ClientError::BackendUnavailable(e)
        })?;

        let wanted = term.to_lowercase();
        let matches: Vec<Post> = posts
            .into_iter()
            .filter(|p| p.title.to_lowercase() == wanted)
            .collect();
        tracing::debug!(term, count = matches.len(), "Post search finished");

        Ok(SearchOutcome::from_results(matches))
    }

    /// Users named `term`. A 404 from the backend means no such user.
    pub async fn search_users_by_name(
        &self,
        term: &str,
    ) -> Result<SearchOutcome<User>, ClientError> {
        match self.backend.search_users(term).await {
            Ok(users) => Ok(SearchOutcome::from_results(users)),
            Err(e) if e.is_not_found() => Ok(SearchOutcome::NoResults),
            Err(e) => {
                tracing::error!(term, error = %e, "User search failed");
                Err(ClientError::BackendUnavailable(e))
            }
        }
    }

    /// Run a post search and record its outcome in `state`.
    pub async fn search_posts_into(
        &self,
        state: &mut SearchState,
        term: &str,
    ) -> Result<(), ClientError> {
        state.posts = self.search_posts_by_title(term).await?;
        Ok(())
    }

    /// Run a user search and record its outcome in `state`.
    pub async fn search_users_into(
        &self,
        state: &mut SearchState,
        term: &str,
    ) -> Result<(), ClientError> {
        state.users = self.search_users_by_name(term).await?;
        Ok(())
    }
}
