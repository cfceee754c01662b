//! Webhook signature verification.
//!
//! The platform signs every delivery with the base64-encoded
//! HMAC-SHA256 of the raw request body under the shared channel
//! secret. A request that fails this check is rejected before any
//! event is dispatched.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// A rejected webhook delivery.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The signature header is not valid base64.
    #[error("signature header is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The signature does not match the request body.
    #[error("signature does not match request body")]
    Mismatch,
}

/// Verify a signature header against the raw request body.
///
/// The comparison is constant-time via [`Mac::verify_slice`].
pub fn verify(secret: &str, body: &[u8], signature: &str) -> Result<(), SignatureError> {
    let decoded = STANDARD.decode(signature)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SignatureError::Mismatch)?;
    mac.update(body);
    mac.verify_slice(&decoded)
        .map_err(|_| SignatureError::Mismatch)
}

/// Compute the signature the platform would attach to a body.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        // HMAC accepts keys of any length.
        Err(_) => return String::new(),
    };
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}
