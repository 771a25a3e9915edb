/*
[INPUT]:  HTTP configuration (base URL, timeouts, user agent, signing key)
[OUTPUT]: Configured reqwest transport executing request descriptors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use tracing::{debug, warn};

use super::{
    Form, IgpapiError, RequestDescriptor, RequestSigner, Result, Transport, TransportResponse,
};

/// Base URL of the mobile API
pub const DEFAULT_BASE_URL: &str = "https://i.instagram.com";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str =
    "Instagram 121.0.0.29.119 Android (26/8.0.0; 480dpi; 1080x1920; Xiaomi; MI 5s; capricorn; qcom; en_US; 185203708)";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// reqwest-backed [`Transport`]
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: None,
        })
    }

    /// Attach the session signing key used by [`Transport::sign`]
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path
    fn url(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    /// Build request builder for a descriptor
    fn request(&self, request: &RequestDescriptor) -> Result<RequestBuilder> {
        let url = self.url(&request.path)?;
        let mut builder = self.http_client.request(request.method.clone(), url);
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }
        Ok(builder)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse> {
        debug!(
            method = %request.method,
            path = %request.path,
            signed = request.signed,
            "sending request"
        );

        let response = self.request(&request)?.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text);
            warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                message = %message,
                "request rejected"
            );
            return Err(IgpapiError::api_error(status, message));
        }

        let body = serde_json::from_str(&text)?;
        Ok(TransportResponse { status, body })
    }

    fn sign(&self, form: Form) -> Result<Form> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| IgpapiError::Config("no signing key configured".to_string()))?;
        signer.sign_form(form)
    }
}

/// Remote-provided message of an error body, falling back to the raw text
fn error_message(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionSigningKey;
    use crate::http::SIGNATURE_FIELD;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_send_get_with_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/blocked_list/"))
            .and(query_param("max_id", "QVFB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut query = crate::http::Query::new();
        query.insert("max_id".to_string(), "QVFB".to_string());
        let request = RequestDescriptor::get("/api/v1/users/blocked_list/").query(query);

        let response = client_for(&server).send(request).await.expect("send failed");
        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_send_post_form_urlencoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/direct_v2/threads/42/update_title/"))
            .and(body_string_contains("title=new+title"))
            .and(body_string_contains("_csrftoken=csrf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut form = Form::new();
        form.insert("_csrftoken".to_string(), "csrf".to_string());
        form.insert("title".to_string(), "new title".to_string());
        let request = RequestDescriptor::post("/api/v1/direct_v2/threads/42/update_title/").form(form);

        let response = client_for(&server).send(request).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_maps_to_api_error_with_remote_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/direct_v2/threads/1/mute/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Thread does not exist",
                "status": "fail",
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(RequestDescriptor::post("/api/v1/direct_v2/threads/1/mute/"))
            .await
            .unwrap_err();
        match err {
            IgpapiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Thread does not exist");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_kept_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/down/"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(RequestDescriptor::get("/down/"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(RequestDescriptor::get("/broken/"))
            .await
            .unwrap_err();
        assert!(matches!(err, IgpapiError::Serialization(_)));
    }

    #[test]
    fn test_sign_without_key_is_config_error() {
        let client = ApiClient::new().expect("client init");
        let err = client.sign(Form::new()).unwrap_err();
        assert!(matches!(err, IgpapiError::Config(_)));
    }

    #[test]
    fn test_sign_with_key_adds_signature() {
        let client = ApiClient::new()
            .expect("client init")
            .with_signer(RequestSigner::new(SessionSigningKey::from_bytes(&[1u8; 32])));
        let signed = client.sign(Form::new()).expect("sign");
        assert!(signed.contains_key(SIGNATURE_FIELD));
    }
}
