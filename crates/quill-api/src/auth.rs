//! Bearer-token authorization gate.
//!
//! Every blog route runs behind [`require_auth`]. The `authorization` header
//! carries an HS256 JWT, optionally prefixed with `Bearer `. A token is
//! accepted when its signature verifies against the shared secret, any
//! `exp`/`nbf` claims it carries are current, and its `id` claim is a
//! non-empty string. The `id` is then exposed to handlers as an
//! [`AuthenticatedUser`].

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Reasons a request fails authentication. All collapse into a 403.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `authorization` header.
    #[error("authorization header is missing")]
    MissingHeader,

    /// Header present but not a usable token string.
    #[error("authorization header is malformed")]
    MalformedHeader,

    /// Signature, algorithm, expiry or payload shape rejected.
    #[error("token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token verified but carries an empty `id`.
    #[error("token carries an empty identity")]
    EmptyIdentity,
}

/// Verified token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Identifier of the user the token was issued to.
    pub id: String,
}

/// Verifies HS256 tokens against a shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("decoding_key", &"[hidden]")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a verifier keyed by `secret`.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens from the auth component carry only `id`; expiry is optional.
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token does not verify, and
    /// `AuthError::EmptyIdentity` if its `id` claim is blank.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        if data.claims.id.trim().is_empty() {
            return Err(AuthError::EmptyIdentity);
        }
        Ok(data.claims)
    }
}

/// Identity of the caller, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The `id` claim of the verified token.
    pub user_id: String,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }
}

/// Extracts the raw token from the `authorization` header.
fn token_from_headers(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return Err(AuthError::MissingHeader);
    }
    Ok(token)
}

/// Authenticates the request headers.
///
/// # Errors
///
/// Returns the `AuthError` describing why the request is not authenticated.
pub fn authenticate(
    headers: &HeaderMap,
    verifier: &TokenVerifier,
) -> Result<AuthenticatedUser, AuthError> {
    let token = token_from_headers(headers)?;
    let claims = verifier.verify(token)?;
    Ok(AuthenticatedUser { user_id: claims.id })
}

/// Middleware that rejects unauthenticated requests with 403 and stores the
/// caller identity for downstream handlers.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when authentication fails.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), &state.token_verifier).map_err(|err| {
        debug!(error = %err, path = %request.uri().path(), "rejecting unauthenticated request");
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use quill_test_support::{sign_claims, sign_token};
    use serde_json::json;

    use super::*;

    const SECRET: &str = "test-secret";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_verify_accepts_token_signed_with_shared_secret() {
        let verifier = TokenVerifier::new(SECRET);

        let claims = verifier.verify(&sign_token(SECRET, "user-1")).unwrap();

        assert_eq!(claims.id, "user-1");
    }

    #[test]
    fn test_verify_rejects_token_signed_with_other_secret() {
        let verifier = TokenVerifier::new(SECRET);

        let result = verifier.verify(&sign_token("other-secret", "user-1"));

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = TokenVerifier::new(SECRET);

        assert!(matches!(
            verifier.verify("not-a-jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let verifier = TokenVerifier::new(SECRET);
        let token = sign_claims(SECRET, &json!({ "id": "user-1", "exp": 1_000_000 }));

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_not_yet_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let token = sign_claims(SECRET, &json!({ "id": "user-1", "nbf": 4_000_000_000_u64 }));

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_accepts_token_already_valid() {
        let verifier = TokenVerifier::new(SECRET);
        let token = sign_claims(SECRET, &json!({ "id": "user-1", "nbf": 1_000_000 }));

        assert_eq!(verifier.verify(&token).unwrap().id, "user-1");
    }

    #[test]
    fn test_verify_rejects_payload_without_id() {
        let verifier = TokenVerifier::new(SECRET);
        let token = sign_claims(SECRET, &json!({ "sub": "user-1" }));

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_rejects_blank_id() {
        let verifier = TokenVerifier::new(SECRET);

        assert!(matches!(
            verifier.verify(&sign_token(SECRET, "  ")),
            Err(AuthError::EmptyIdentity)
        ));
    }

    #[test]
    fn test_authenticate_accepts_raw_and_bearer_tokens() {
        let verifier = TokenVerifier::new(SECRET);
        let token = sign_token(SECRET, "user-1");

        let raw = authenticate(&headers_with(&token), &verifier).unwrap();
        let bearer = authenticate(&headers_with(&format!("Bearer {token}")), &verifier).unwrap();

        assert_eq!(raw.user_id, "user-1");
        assert_eq!(bearer, raw);
    }

    #[test]
    fn test_authenticate_without_header_is_missing_header() {
        let verifier = TokenVerifier::new(SECRET);

        assert!(matches!(
            authenticate(&HeaderMap::new(), &verifier),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_debug_output_hides_key() {
        let rendered = format!("{:?}", TokenVerifier::new(SECRET));

        assert!(rendered.contains("[hidden]"));
        assert!(!rendered.contains(SECRET));
    }
}
