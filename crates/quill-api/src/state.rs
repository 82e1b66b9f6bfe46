//! Shared application state.

use std::sync::Arc;

use quill_core::repository::BlogRepository;

use crate::auth::TokenVerifier;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Blog persistence port.
    pub blog_repository: Arc<dyn BlogRepository>,
    /// Verifies bearer tokens against the shared secret.
    pub token_verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(blog_repository: Arc<dyn BlogRepository>, token_verifier: Arc<TokenVerifier>) -> Self {
        Self {
            blog_repository,
            token_verifier,
        }
    }
}
