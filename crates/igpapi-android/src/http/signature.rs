/*
[INPUT]:  Form fields and the session signing key
[OUTPUT]: Form fields with an added base64 signature field
[POS]:    HTTP layer - form signing for endpoints that require signed bodies
[UPDATE]: When changing the signed payload or signature field
*/

use crate::auth::SessionSigningKey;
use crate::http::{Form, Result};

/// Form field carrying the signature
pub const SIGNATURE_FIELD: &str = "signature";

/// Signs form bodies with the session signing key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key: SessionSigningKey,
}

impl RequestSigner {
    pub fn new(key: SessionSigningKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &SessionSigningKey {
        &self.key
    }

    /// Canonical payload: the JSON object of the form with keys in sorted order
    pub fn payload(form: &Form) -> Result<String> {
        Ok(serde_json::to_string(form)?)
    }

    /// Sign a form and return a copy with the signature field added.
    ///
    /// Ed25519 is deterministic, so the same key and form always yield the same output.
    pub fn sign_form(&self, form: Form) -> Result<Form> {
        let payload = Self::payload(&form)?;
        let signature = self.key.sign_base64(payload.as_bytes());

        let mut signed = form;
        signed.insert(SIGNATURE_FIELD.to_string(), signature);
        Ok(signed)
    }
}
