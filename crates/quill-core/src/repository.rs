//! Blog repository abstraction.

use async_trait::async_trait;

use crate::blog::{Blog, BlogChanges, BlogFilter, NewBlog};
use crate::error::DomainError;

/// Repository trait for reading and writing blog rows.
///
/// Every method is a single round trip to the backing store. Implementations
/// report store failures as `DomainError::Infrastructure`.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Load the blog with the given id, if any.
    async fn find_unique(&self, id: &str) -> Result<Option<Blog>, DomainError>;

    /// Load every blog matching `filter`.
    async fn find_many(&self, filter: &BlogFilter) -> Result<Vec<Blog>, DomainError>;

    /// Load every blog.
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError>;

    /// Insert a new blog. The store generates the id.
    async fn create(&self, blog: NewBlog) -> Result<Blog, DomainError>;

    /// Replace title and content of the blog with the given id.
    /// Returns `None` when no row matched.
    async fn update(&self, id: &str, changes: BlogChanges) -> Result<Option<Blog>, DomainError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), DomainError>;
}
