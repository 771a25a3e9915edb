/*
[INPUT]:  Target user id, session capabilities and an injected transport
[OUTPUT]: Story items of one user
[POS]:    Feed layer - single-page story reel feed
[UPDATE]: When the story endpoint or its query changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{Feed, FeedCursor};
use crate::http::{Query, RequestDescriptor, Result, Transport};
use crate::id::Id;
use crate::state::SessionState;
use crate::types::{StoryItem, UserStoryFeedResponse};

/// Active story of one user. The endpoint returns the whole reel in one page.
#[derive(Clone)]
pub struct UserStoryFeed {
    transport: Arc<dyn Transport>,
    state: Arc<SessionState>,
    user_id: Id,
    cursor: FeedCursor,
}

impl UserStoryFeed {
    pub fn new(
        transport: Arc<dyn Transport>,
        state: Arc<SessionState>,
        user_id: impl Into<Id>,
    ) -> Self {
        Self {
            transport,
            state,
            user_id: user_id.into(),
            cursor: FeedCursor::Ready,
        }
    }

    pub fn user_id(&self) -> &Id {
        &self.user_id
    }
}

#[async_trait]
impl Feed for UserStoryFeed {
    type Response = UserStoryFeedResponse;
    type Item = StoryItem;

    fn cursor(&self) -> &FeedCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut FeedCursor {
        &mut self.cursor
    }

    /// GET /api/v1/feed/user/{user_id}/story/?supported_capabilities_new={json}
    async fn request(&self, _max_id: Option<&str>) -> Result<UserStoryFeedResponse> {
        let mut query = Query::new();
        query.insert(
            "supported_capabilities_new".to_string(),
            self.state.supported_capabilities_json()?,
        );

        debug!(user_id = %self.user_id, "fetching user story");
        let request =
            RequestDescriptor::get(format!("/api/v1/feed/user/{}/story/", self.user_id)).query(query);
        self.transport.send_json(request).await
    }

    fn items(&self, page: UserStoryFeedResponse) -> Vec<StoryItem> {
        page.reel.map(|reel| reel.items).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{IgpapiError, MockTransport};
    use crate::state::Capability;
    use reqwest::Method;

    fn feed_with(transport: Arc<MockTransport>) -> UserStoryFeed {
        let state = SessionState::new("uuid-1", "android-1", "csrf-1")
            .with_supported_capabilities(vec![Capability::new("FACE_TRACKER_VERSION", "14")]);
        UserStoryFeed::new(transport, Arc::new(state), 25025320u64)
    }

    #[test]
    fn test_items_from_reel_fixture() {
        let feed = feed_with(Arc::new(MockTransport::new()));
        let page: UserStoryFeedResponse = serde_json::from_value(serde_json::json!({
            "reel": { "items": [{ "id": "a" }, { "id": "b" }] }
        }))
        .unwrap();

        let ids: Vec<String> = feed.items(page).into_iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_request_shape_and_single_page() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(serde_json::json!({
            "reel": { "id": 25025320, "items": [{ "id": "3001_25025320", "media_type": 1 }] },
            "status": "ok"
        }));
        let mut feed = feed_with(transport.clone());

        let items = feed.items_page().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].media_type, Some(1));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/v1/feed/user/25025320/story/");
        assert_eq!(
            request.query_value("supported_capabilities_new"),
            Some(r#"[{"name":"FACE_TRACKER_VERSION","value":"14"}]"#)
        );
        assert_eq!(request.query_value("max_id"), None);

        assert!(!feed.is_more_available());
        assert!(matches!(
            feed.fetch_page().await.unwrap_err(),
            IgpapiError::FeedExhausted
        ));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_null_reel_yields_no_items() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(serde_json::json!({ "reel": null, "status": "ok" }));
        let mut feed = feed_with(transport);

        assert!(feed.items_page().await.unwrap().is_empty());
    }
}
