//! Commands for the blog context.

use quill_core::command::Command;
use uuid::Uuid;

use super::inputs::{CreateBlogInput, UpdateBlogInput};

/// Command to create a blog owned by the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateBlog {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The authenticated user that becomes the author.
    pub author_id: String,
    /// Blog title.
    pub title: String,
    /// Blog body.
    pub content: String,
}

impl CreateBlog {
    /// Builds the command from a validated input and the caller identity.
    #[must_use]
    pub fn new(correlation_id: Uuid, author_id: String, input: CreateBlogInput) -> Self {
        Self {
            correlation_id,
            author_id,
            title: input.title,
            content: input.content,
        }
    }
}

impl Command for CreateBlog {
    const NAME: &'static str = "blog.create";

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the title and content of an existing blog.
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The blog identifier.
    pub id: String,
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub content: String,
}

impl UpdateBlog {
    /// Builds the command from a validated input.
    #[must_use]
    pub fn new(correlation_id: Uuid, input: UpdateBlogInput) -> Self {
        Self {
            correlation_id,
            id: input.id,
            title: input.title,
            content: input.content,
        }
    }
}

impl Command for UpdateBlog {
    const NAME: &'static str = "blog.update";

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
