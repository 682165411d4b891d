use crate::feed::{Feed, FeedPhase};
use crate::source::ContentSource;
use folio_model::Record;
use folio_query::SortKey;

/// Couples a feed to its content source.
///
/// `load` covers both the initial fetch and pull-to-refresh: the feed picks
/// the phase from its own history, and coalescing means a call issued while
/// a fetch is outstanding returns without touching anything. Single UI
/// thread: the driver is `&mut self` throughout, fetches suspend the call
/// site rather than run in parallel.
pub struct FeedDriver<S, T> {
    source: S,
    feed: Feed<T>,
}

impl<S, T> FeedDriver<S, T>
where
    S: ContentSource<T>,
    T: Record,
{
    pub fn new(source: S, sort_key: SortKey, featured_first: bool) -> Self {
        Self {
            source,
            feed: Feed::new(sort_key, featured_first),
        }
    }

    pub fn with_feed(source: S, feed: Feed<T>) -> Self {
        Self { source, feed }
    }

    pub fn feed(&self) -> &Feed<T> {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut Feed<T> {
        &mut self.feed
    }

    /// Fetch and resolve into the feed. Returns false when coalesced away
    /// or when the result arrived stale.
    pub async fn load(&mut self) -> bool {
        let Some(ticket) = self.feed.begin_fetch() else {
            return false;
        };
        let outcome = self.source.fetch().await;
        self.feed.resolve(ticket, outcome)
    }

    /// Retry from an error state; a no-op otherwise.
    pub async fn retry(&mut self) -> bool {
        if !matches!(self.feed.phase(), FeedPhase::Error(_)) {
            return false;
        }
        self.load().await
    }
}
