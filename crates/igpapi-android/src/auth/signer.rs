/*
[INPUT]:  Base64 secret key material, or fresh randomness for a new key
[OUTPUT]: Base64 Ed25519 signatures and key encodings
[POS]:    Auth layer - session signing key for form signatures
[UPDATE]: When changing signing algorithm or key format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand::rngs::OsRng;

use crate::http::{IgpapiError, Result};

/// Ed25519 key used to sign form bodies.
///
/// Keys travel as base64 of the 32 secret bytes, both in settings files and in the
/// output of `igpapi keygen`.
#[derive(Debug, Clone)]
pub struct SessionSigningKey {
    key: SigningKey,
}

impl SessionSigningKey {
    /// Fresh key from the OS random source
    pub fn random() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn from_bytes(secret: &[u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(secret),
        }
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|e| IgpapiError::Config(format!("signing key is not valid base64: {e}")))?;
        let secret: [u8; 32] = decoded.as_slice().try_into().map_err(|_| {
            IgpapiError::Config(format!(
                "signing key must be 32 bytes, got {}",
                decoded.len()
            ))
        })?;
        Ok(Self::from_bytes(&secret))
    }

    /// Secret key as stored in `signing_key`
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.key.to_bytes())
    }

    pub fn public_key_base64(&self) -> String {
        BASE64.encode(self.key.verifying_key().as_bytes())
    }

    /// Base64 of the 64 byte signature over `message`
    pub fn sign_base64(&self, message: &[u8]) -> String {
        BASE64.encode(self.key.sign(message).to_bytes())
    }

    /// False for malformed base64, wrong length or a signature that does not match
    pub fn verify_base64(&self, message: &[u8], signature: &str) -> bool {
        let Ok(bytes) = BASE64.decode(signature) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&bytes) else {
            return false;
        };
        self.key.verifying_key().verify(message, &signature).is_ok()
    }
}
