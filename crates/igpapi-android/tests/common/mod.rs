/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for igpapi-android tests

use igpapi_android::{IgpapiClient, SessionState, Settings};
use wiremock::MockServer;

pub const CSRF_TOKEN: &str = "csrf-token";
pub const UUID: &str = "8d6d3b1c-0f6a-4c1e-9a57-3e8b2f1d9c00";
pub const DEVICE_ID: &str = "android-2f5e9b7c1a3d4e6f";

/// Base64 of 32 bytes of 0x01
#[allow(dead_code)]
pub const SIGNING_KEY: &str = "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_session() -> SessionState {
    SessionState::new(UUID, DEVICE_ID, CSRF_TOKEN)
}

/// Settings pointing at the mock server
#[allow(dead_code)]
pub fn test_settings(server: &MockServer) -> Settings {
    let mut settings = Settings::new(test_session());
    settings.base_url = server.uri();
    settings
}

/// reqwest-backed client talking to the mock server
pub fn test_client(server: &MockServer) -> IgpapiClient {
    IgpapiClient::from_settings(test_settings(server)).expect("client init")
}
