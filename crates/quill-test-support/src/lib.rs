//! Shared test mocks and utilities for the Quill blog API.

mod repository;
mod token;

pub use repository::{FailingBlogRepository, InMemoryBlogRepository};
pub use token::{sign_claims, sign_token};
