//! Input schemas for blog request bodies.
//!
//! A body is accepted only if it deserializes into the schema type and
//! passes the schema's field constraints. Unknown fields are ignored.

use quill_core::error::DomainError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateBlogInput {
    /// Blog title.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Blog body.
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Body of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateBlogInput {
    /// Identifier of the blog to update.
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    /// Replacement title.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Replacement body.
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Checks `body` against the schema `T`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `body` has the wrong shape or
/// violates a field constraint.
pub fn parse_input<T>(body: serde_json::Value) -> Result<T, DomainError>
where
    T: DeserializeOwned + Validate,
{
    let input: T =
        serde_json::from_value(body).map_err(|e| DomainError::Validation(e.to_string()))?;
    input
        .validate()
        .map_err(|e| DomainError::Validation(e.to_string()))?;
    Ok(input)
}
