/*
[INPUT]:  Session signing key material
[OUTPUT]: Ed25519 key used for signed form bodies
[POS]:    Auth layer - key handling for request signing
[UPDATE]: When signature methods change
*/

pub mod signer;

pub use signer::SessionSigningKey;
