//! Bounded, order-preserving concurrent map.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Default number of in-flight lookups per fan-out.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Run `f` over `items` with at most `limit` futures in flight.
///
/// Results come back in input order regardless of completion order.
pub async fn ordered_map<I, F, Fut>(items: I, limit: usize, f: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}
