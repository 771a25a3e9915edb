/*
[INPUT]:  Settings, or an explicit transport and session state
[OUTPUT]: Repositories and feeds sharing one transport and session
[POS]:    Crate facade - entry point wiring collaborators together
[UPDATE]: When adding repositories or feeds
*/

use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::feeds::{BlockedUsersFeed, UserStoryFeed};
use crate::http::{ApiClient, RequestSigner, Result, Transport};
use crate::id::Id;
use crate::repositories::DirectThreadRepository;
use crate::state::SessionState;

/// Entry point handing out repositories and feeds
#[derive(Clone)]
pub struct IgpapiClient {
    transport: Arc<dyn Transport>,
    state: Arc<SessionState>,
}

impl IgpapiClient {
    pub fn new(transport: Arc<dyn Transport>, state: Arc<SessionState>) -> Self {
        Self { transport, state }
    }

    /// Build a reqwest-backed client from settings
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let mut api_client =
            ApiClient::with_config_and_base_url(settings.client_config(), &settings.base_url)?;
        if let Some(signer) = settings.signer()? {
            api_client = api_client.with_signer(RequestSigner::new(signer));
        }

        info!(
            base_url = %api_client.base_url(),
            signing = settings.signing_key.is_some(),
            "api client configured"
        );

        Ok(Self::new(Arc::new(api_client), Arc::new(settings.session)))
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn direct_thread(&self) -> DirectThreadRepository {
        DirectThreadRepository::new(self.transport.clone(), self.state.clone())
    }

    pub fn user_story_feed(&self, user_id: impl Into<Id>) -> UserStoryFeed {
        UserStoryFeed::new(self.transport.clone(), self.state.clone(), user_id)
    }

    pub fn blocked_users_feed(&self) -> BlockedUsersFeed {
        BlockedUsersFeed::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::Feed;
    use crate::http::MockTransport;

    #[tokio::test]
    async fn test_repositories_share_transport() {
        let transport = Arc::new(MockTransport::new());
        let client = IgpapiClient::new(
            transport.clone(),
            Arc::new(SessionState::new("u", "d", "c")),
        );

        client.direct_thread().mute("1").await.unwrap();
        client.blocked_users_feed().fetch_page().await.unwrap();

        assert_eq!(transport.request_count(), 2);
        assert_eq!(client.state().csrf_token(), "c");
    }

    #[test]
    fn test_from_settings_with_signing_key() {
        let mut settings = Settings::new(SessionState::new("u", "d", "c"));
        settings.signing_key = Some("AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=".to_string());

        let client = IgpapiClient::from_settings(settings).expect("client init");
        let signed = client.transport().sign(Default::default()).expect("sign");
        assert!(signed.contains_key(crate::http::SIGNATURE_FIELD));
    }

    #[test]
    fn test_from_settings_rejects_bad_key() {
        let mut settings = Settings::new(SessionState::new("u", "d", "c"));
        settings.signing_key = Some("short".to_string());
        assert!(IgpapiClient::from_settings(settings).is_err());
    }
}
