/*
[INPUT]:  Request descriptors from repositories and feeds under test
[OUTPUT]: Recorded descriptors and queued canned response bodies
[POS]:    HTTP layer - in-memory transport for tests and offline callers
[UPDATE]: When Transport gains methods
*/

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{Form, IgpapiError, RequestDescriptor, Result, Transport, TransportResponse};

/// Signature value written by [`MockTransport::sign`]
pub const MOCK_SIGNATURE: &str = "mock-signature";

/// Transport that records every descriptor and replays queued results.
///
/// When the queue is empty, `send` answers `{"status": "ok"}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<Result<serde_json::Value>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn push_response(&self, body: serde_json::Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a failure returned by the next `send`
    pub fn push_error(&self, error: IgpapiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every descriptor sent so far, oldest first
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RequestDescriptor> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        let body = next.unwrap_or_else(|| Ok(serde_json::json!({ "status": "ok" })))?;
        Ok(TransportResponse {
            status: StatusCode::OK,
            body,
        })
    }

    fn sign(&self, form: Form) -> Result<Form> {
        let mut signed = form;
        signed.insert(super::SIGNATURE_FIELD.to_string(), MOCK_SIGNATURE.to_string());
        Ok(signed)
    }
}
