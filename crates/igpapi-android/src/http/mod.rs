/*
[INPUT]:  Request descriptors, HTTP client configuration and signing keys
[OUTPUT]: Transport capability, HTTP responses and crate error type
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding transports or changing request shape
*/

pub mod client;
pub mod error;
pub mod mock;
pub mod request;
pub mod signature;
pub mod transport;

pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{IgpapiError, Result};
pub use mock::{MOCK_SIGNATURE, MockTransport};
pub use request::{Form, Query, RequestDescriptor};
pub use signature::{RequestSigner, SIGNATURE_FIELD};
pub use transport::{Transport, TransportResponse};
