//! Test repositories — mock `BlogRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use quill_core::blog::{Blog, BlogChanges, BlogFilter, NewBlog};
use quill_core::error::DomainError;
use quill_core::repository::BlogRepository;
use uuid::Uuid;

/// A blog repository backed by a `Vec` in insertion order. Generates UUID v4
/// ids on `create`, like the PostgreSQL store.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    blogs: Mutex<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `blogs`.
    #[must_use]
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: Mutex::new(blogs),
        }
    }

    /// Returns a snapshot of all stored blogs.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn blogs(&self) -> Vec<Blog> {
        self.blogs.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_unique(&self, id: &str) -> Result<Option<Blog>, DomainError> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_many(&self, filter: &BlogFilter) -> Result<Vec<Blog>, DomainError> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.blogs())
    }

    async fn create(&self, blog: NewBlog) -> Result<Blog, DomainError> {
        let blog = Blog {
            id: Uuid::new_v4().to_string(),
            title: blog.title,
            content: blog.content,
            author_id: blog.author_id,
        };
        self.blogs.lock().unwrap().push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: &str, changes: BlogChanges) -> Result<Option<Blog>, DomainError> {
        let mut blogs = self.blogs.lock().unwrap();
        Ok(blogs.iter_mut().find(|b| b.id == id).map(|b| {
            b.title = changes.title;
            b.content = changes.content;
            b.clone()
        }))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A blog repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingBlogRepository;

#[async_trait]
impl BlogRepository for FailingBlogRepository {
    async fn find_unique(&self, _id: &str) -> Result<Option<Blog>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_many(&self, _filter: &BlogFilter) -> Result<Vec<Blog>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn create(&self, _blog: NewBlog) -> Result<Blog, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn update(&self, _id: &str, _changes: BlogChanges) -> Result<Option<Blog>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
