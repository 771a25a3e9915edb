/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public mobile API client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod client;
pub mod config;
pub mod feeds;
pub mod http;
pub mod id;
pub mod repositories;
pub mod state;
pub mod types;

pub use auth::SessionSigningKey;

pub use client::IgpapiClient;

pub use config::Settings;

pub use feeds::{BlockedUsersFeed, Feed, FeedCursor, UserStoryFeed, collect_all, into_stream};

// Re-export commonly used types from http
pub use http::{
    ApiClient,
    ClientConfig,
    Form,
    IgpapiError,
    MockTransport,
    Query,
    RequestDescriptor,
    RequestSigner,
    Result,
    Transport,
    TransportResponse,
};

pub use id::Id;

pub use repositories::DirectThreadRepository;

pub use state::{Capability, SessionState};

// Re-export all types
pub use types::*;
