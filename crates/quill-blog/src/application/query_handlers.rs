//! Query handlers for the blog context.
//!
//! This module contains query handlers that read blogs from the repository
//! and return read-only view DTOs.

use quill_core::blog::{Blog, BlogFilter};
use quill_core::error::DomainError;
use quill_core::repository::BlogRepository;
use serde::Serialize;

/// Read-only view of a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    /// The blog identifier.
    pub id: String,
    /// Blog title.
    pub title: String,
    /// Blog body.
    pub content: String,
    /// The authoring user.
    pub author_id: String,
}

impl From<Blog> for BlogView {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            content: blog.content,
            author_id: blog.author_id,
        }
    }
}

/// Retrieves a blog by its id. A missing blog is `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the lookup fails.
pub async fn get_blog_by_id(
    id: &str,
    repo: &dyn BlogRepository,
) -> Result<Option<BlogView>, DomainError> {
    Ok(repo.find_unique(id).await?.map(BlogView::from))
}

/// Lists every blog matching `filter`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the query fails.
pub async fn list_blogs(
    filter: &BlogFilter,
    repo: &dyn BlogRepository,
) -> Result<Vec<BlogView>, DomainError> {
    let blogs = repo.find_many(filter).await?;
    Ok(blogs.into_iter().map(BlogView::from).collect())
}

/// Lists every blog.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the query fails.
pub async fn list_all_blogs(repo: &dyn BlogRepository) -> Result<Vec<BlogView>, DomainError> {
    let blogs = repo.find_all().await?;
    Ok(blogs.into_iter().map(BlogView::from).collect())
}

#[cfg(test)]
mod tests {
    use quill_core::blog::{Blog, BlogFilter};
    use quill_core::error::DomainError;
    use quill_test_support::{FailingBlogRepository, InMemoryBlogRepository};

    use super::*;

    fn blog(id: &str, title: &str) -> Blog {
        Blog {
            id: id.to_owned(),
            title: title.to_owned(),
            content: format!("{title} body"),
            author_id: "author-1".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_get_blog_by_id_returns_view() {
        // Arrange
        let repo = InMemoryBlogRepository::with_blogs(vec![blog("a", "A"), blog("b", "B")]);

        // Act
        let view = get_blog_by_id("b", &repo).await.unwrap().unwrap();

        // Assert
        assert_eq!(view.id, "b");
        assert_eq!(view.title, "B");
        assert_eq!(view.content, "B body");
        assert_eq!(view.author_id, "author-1");
    }

    #[tokio::test]
    async fn test_get_blog_by_id_returns_none_for_unknown_id() {
        let repo = InMemoryBlogRepository::new();

        let view = get_blog_by_id("missing", &repo).await.unwrap();

        assert!(view.is_none());
    }

    #[tokio::test]
    async fn test_list_blogs_applies_id_filter() {
        // Arrange
        let repo = InMemoryBlogRepository::with_blogs(vec![blog("a", "A"), blog("b", "B")]);

        // Act
        let views = list_blogs(&BlogFilter::by_id("a"), &repo).await.unwrap();

        // Assert
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, "a");
    }

    #[tokio::test]
    async fn test_list_blogs_with_empty_filter_returns_all() {
        let repo = InMemoryBlogRepository::with_blogs(vec![blog("a", "A"), blog("b", "B")]);

        let views = list_blogs(&BlogFilter::default(), &repo).await.unwrap();

        assert_eq!(views.len(), 2);
    }

    #[tokio::test]
    async fn test_list_all_blogs_on_empty_store_returns_empty_vec() {
        let repo = InMemoryBlogRepository::new();

        let views = list_all_blogs(&repo).await.unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_blogs_propagates_store_failure() {
        let result = list_all_blogs(&FailingBlogRepository).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
