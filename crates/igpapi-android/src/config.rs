/*
[INPUT]:  YAML settings file
[OUTPUT]: Parsed client settings and session state
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::SessionSigningKey;
use crate::http::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, IgpapiError, Result};
use crate::state::SessionState;

/// Top-level settings of one client instance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Ed25519 secret key for signed bodies (base64 encoded, 32 bytes)
    #[serde(default)]
    pub signing_key: Option<String>,
    /// Session of the authenticated account
    pub session: SessionState,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Settings {
    pub fn new(session: SessionState) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            signing_key: None,
            session,
        }
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            IgpapiError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| IgpapiError::Config(format!("invalid settings: {e}")))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Key decoded from `signing_key`, if configured
    pub fn signer(&self) -> Result<Option<SessionSigningKey>> {
        self.signing_key
            .as_deref()
            .map(SessionSigningKey::from_base64)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let settings = Settings::from_yaml_str(
            r#"
session:
  uuid: 0b9f7e0c-uuid
  device_id: android-3f2a
  csrf_token: csrf-token
"#,
        )
        .unwrap();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.session.device_id(), "android-3f2a");
        assert!(settings.signer().unwrap().is_none());

        let config = settings.client_config();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_full_yaml() {
        let settings = Settings::from_yaml_str(
            r#"
base_url: http://127.0.0.1:8080
timeout_secs: 5
connect_timeout_secs: 2
user_agent: test-agent
signing_key: AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=
session:
  uuid: u
  device_id: d
  csrf_token: c
  supported_capabilities:
    - name: FACE_TRACKER_VERSION
      value: "14"
"#,
        )
        .unwrap();

        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.client_config().user_agent, "test-agent");
        assert_eq!(settings.session.supported_capabilities().len(), 1);
        let signer = settings.signer().unwrap().expect("signer");
        assert_eq!(signer.to_base64(), "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=");
    }

    #[test]
    fn test_missing_session_is_config_error() {
        let err = Settings::from_yaml_str("base_url: http://localhost\n").unwrap_err();
        assert!(matches!(err, IgpapiError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Settings::from_file("/nonexistent/igpapi.yaml").unwrap_err();
        assert!(matches!(err, IgpapiError::Config(_)));
    }
}
