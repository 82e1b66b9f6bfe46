//! Test tokens — HS256 JWTs in the shape the external auth component issues.

use jsonwebtoken::{EncodingKey, Header, encode};

/// Signs `{ "id": user_id }` with `secret`.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
pub fn sign_token(secret: &str, user_id: &str) -> String {
    sign_claims(secret, &serde_json::json!({ "id": user_id }))
}

/// Signs an arbitrary claims object with `secret`. Used for expired or
/// malformed payloads.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
pub fn sign_claims(secret: &str, claims: &serde_json::Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("test token encoding failed")
}
