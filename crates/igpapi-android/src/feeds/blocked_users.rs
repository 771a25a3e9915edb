/*
[INPUT]:  Continuation cursor and an injected transport
[OUTPUT]: Blocked user entries, page by page
[POS]:    Feed layer - max_id paginated feed
[UPDATE]: When the blocked list endpoint or paging changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{Feed, FeedCursor};
use crate::http::{Query, RequestDescriptor, Result, Transport};
use crate::types::{BlockedUser, BlockedUsersFeedResponse};

/// Accounts blocked by the session user
#[derive(Clone)]
pub struct BlockedUsersFeed {
    transport: Arc<dyn Transport>,
    cursor: FeedCursor,
}

impl BlockedUsersFeed {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cursor: FeedCursor::Ready,
        }
    }
}

#[async_trait]
impl Feed for BlockedUsersFeed {
    type Response = BlockedUsersFeedResponse;
    type Item = BlockedUser;

    fn cursor(&self) -> &FeedCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut FeedCursor {
        &mut self.cursor
    }

    /// GET /api/v1/users/blocked_list/?max_id={max_id}
    async fn request(&self, max_id: Option<&str>) -> Result<BlockedUsersFeedResponse> {
        let mut request = RequestDescriptor::get("/api/v1/users/blocked_list/");
        if let Some(max_id) = max_id {
            let mut query = Query::new();
            query.insert("max_id".to_string(), max_id.to_string());
            request = request.query(query);
        }

        debug!(max_id = ?max_id, "fetching blocked users page");
        self.transport.send_json(request).await
    }

    fn items(&self, page: BlockedUsersFeedResponse) -> Vec<BlockedUser> {
        page.blocked_list
    }

    fn next_max_id(&self, page: &BlockedUsersFeedResponse) -> Option<String> {
        page.next_max_id.clone()
    }
}
