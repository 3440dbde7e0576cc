//! Unverified JWT claim decoding.
//!
//! The access token is decoded client-side only to read the embedded user
//! identifier; signature validation stays the backend's job. A token that
//! fails to decode is treated as "no session", never as an error.

#[cfg(test)]
#[path = "jwt_test.rs"]
pub(crate) mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claim set embedded in the access token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub is_new_user: Option<bool>,
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url JSON payload carrying a `user_id`.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    // Issuers differ on padding; accept both.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
