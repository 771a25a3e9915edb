/*
[INPUT]:  Single-page request operations of collection endpoints
[OUTPUT]: Cursor-driven page fetching, item extraction and page streams
[POS]:    Feed layer - pagination contract shared by all feeds
[UPDATE]: When the pagination contract or drivers change
*/

//! Paginated feeds.
//!
//! A feed owns a [`FeedCursor`] and moves through
//! `Ready -> HasPage(max_id) -> ... -> Exhausted`. Fetches take `&mut self`, so
//! one feed instance can never run two page requests at once.
//!
//! Fetching an exhausted feed fails with [`IgpapiError::FeedExhausted`] without
//! touching the network. Call [`Feed::reset`] to start over.

pub mod blocked_users;
pub mod user_story;

use async_trait::async_trait;
use futures_util::stream::{self, Stream};
use serde::de::DeserializeOwned;

use crate::http::{IgpapiError, Result};

pub use blocked_users::BlockedUsersFeed;
pub use user_story::UserStoryFeed;

/// Continuation state of a feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedCursor {
    /// No page fetched yet
    #[default]
    Ready,
    /// Last page pointed at a next page
    HasPage(String),
    /// Last page had no continuation token
    Exhausted,
}

impl FeedCursor {
    /// Cursor following a page with the given continuation token
    pub fn after_page(next_max_id: Option<String>) -> Self {
        match next_max_id {
            Some(max_id) => FeedCursor::HasPage(max_id),
            None => FeedCursor::Exhausted,
        }
    }

    pub fn max_id(&self) -> Option<&str> {
        match self {
            FeedCursor::HasPage(max_id) => Some(max_id),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, FeedCursor::Exhausted)
    }
}

#[async_trait]
pub trait Feed: Send + Sync {
    /// Raw page body
    type Response: DeserializeOwned + Send;
    /// Record nested in a page
    type Item: Send;

    fn cursor(&self) -> &FeedCursor;

    fn cursor_mut(&mut self) -> &mut FeedCursor;

    /// One round trip for one page. `max_id` is `None` for the first page.
    async fn request(&self, max_id: Option<&str>) -> Result<Self::Response>;

    /// Items nested under the feed-specific key, in page order
    fn items(&self, page: Self::Response) -> Vec<Self::Item>;

    /// Continuation token of a page.
    ///
    /// Feeds whose endpoint paginates override this. The default treats every
    /// page as the last one.
    fn next_max_id(&self, _page: &Self::Response) -> Option<String> {
        None
    }

    fn is_more_available(&self) -> bool {
        !self.cursor().is_exhausted()
    }

    /// Forget the cursor; the next fetch starts from the first page
    fn reset(&mut self) {
        *self.cursor_mut() = FeedCursor::Ready;
    }

    /// Fetch the next page and advance the cursor
    async fn fetch_page(&mut self) -> Result<Self::Response> {
        let max_id = match self.cursor() {
            FeedCursor::Exhausted => return Err(IgpapiError::FeedExhausted),
            FeedCursor::Ready => None,
            FeedCursor::HasPage(max_id) => Some(max_id.clone()),
        };

        let page = self.request(max_id.as_deref()).await?;
        let next = self.next_max_id(&page);
        *self.cursor_mut() = FeedCursor::after_page(next);
        Ok(page)
    }

    /// Fetch the next page and return its items
    async fn items_page(&mut self) -> Result<Vec<Self::Item>> {
        let page = self.fetch_page().await?;
        Ok(self.items(page))
    }
}

/// Drive a feed until exhaustion, concatenating items of every page
pub async fn collect_all<F: Feed>(feed: &mut F) -> Result<Vec<F::Item>> {
    let mut items = Vec::new();
    while feed.is_more_available() {
        items.extend(feed.items_page().await?);
    }
    Ok(items)
}

/// Stream of item pages; ends after the last page or on the first error
pub fn into_stream<F: Feed>(feed: F) -> impl Stream<Item = Result<Vec<F::Item>>> {
    stream::try_unfold(feed, |mut feed| async move {
        if !feed.is_more_available() {
            return Ok(None);
        }
        let items = feed.items_page().await?;
        Ok(Some((items, feed)))
    })
}
