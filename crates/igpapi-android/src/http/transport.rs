/*
[INPUT]:  Request descriptors and form fields
[OUTPUT]: Parsed response bodies, typed responses and signed forms
[POS]:    HTTP layer - transport capability injected into repositories and feeds
[UPDATE]: When transports need new capabilities
*/

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{Form, RequestDescriptor, Result};

/// Parsed body and status of one completed call
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// Performs network calls on behalf of repositories and feeds.
///
/// Implementations own timeouts and connection handling. A non-success status must
/// surface as [`IgpapiError::Api`](crate::http::IgpapiError::Api).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform exactly one network call
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse>;

    /// Return `form` with an added signature field
    fn sign(&self, form: Form) -> Result<Form>;
}

impl dyn Transport {
    /// Send and deserialize the body into the endpoint's response type
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        let response = self.send(request).await?;
        Ok(serde_json::from_value(response.body)?)
    }
}
