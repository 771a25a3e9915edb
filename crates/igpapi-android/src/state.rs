/*
[INPUT]:  Per-account session values (uuid, device id, csrf token, capabilities)
[OUTPUT]: Read-only accessors and the ambient form fields of mutating calls
[POS]:    Session layer - ambient values populating every outgoing request
[UPDATE]: When the set of ambient request fields changes
*/

use serde::{Deserialize, Serialize};

use crate::http::{Form, Result};

/// A client capability advertised to feed endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub value: String,
}

impl Capability {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Capabilities sent when the session does not configure its own list
pub fn default_capabilities() -> Vec<Capability> {
    vec![
        Capability::new("SUPPORTED_SDK_VERSIONS", "108.0,109.0,110.0,111.0,112.0,113.0,114.0,115.0,116.0,117.0"),
        Capability::new("FACE_TRACKER_VERSION", "14"),
        Capability::new("segmentation", "segmentation_enabled"),
        Capability::new("COMPRESSION", "ETC2_COMPRESSION"),
        Capability::new("world_tracker", "world_tracker_enabled"),
        Capability::new("gyroscope", "gyroscope_enabled"),
    ]
}

/// Session state of one authenticated account.
///
/// Populated by the login flow (outside this crate) or loaded from settings.
/// Repositories and feeds only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    uuid: String,
    device_id: String,
    csrf_token: String,
    #[serde(default = "default_capabilities")]
    supported_capabilities: Vec<Capability>,
}

impl SessionState {
    pub fn new(
        uuid: impl Into<String>,
        device_id: impl Into<String>,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            device_id: device_id.into(),
            csrf_token: csrf_token.into(),
            supported_capabilities: default_capabilities(),
        }
    }

    pub fn with_supported_capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.supported_capabilities = capabilities;
        self
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn supported_capabilities(&self) -> &[Capability] {
        &self.supported_capabilities
    }

    /// Capabilities as the JSON collection expected by feed queries
    pub fn supported_capabilities_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.supported_capabilities)?)
    }

    /// `_csrftoken` and `_uuid`, carried by every mutating call
    pub fn session_form(&self) -> Form {
        let mut form = Form::new();
        form.insert("_csrftoken".to_string(), self.csrf_token.clone());
        form.insert("_uuid".to_string(), self.uuid.clone());
        form
    }
}
