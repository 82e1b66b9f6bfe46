//! Command handlers for the blog context.
//!
//! This module contains application-level command handler functions that
//! turn a validated command into a single repository write.

use quill_core::blog::{Blog, BlogChanges, NewBlog};
use quill_core::command::Command;
use quill_core::error::DomainError;
use quill_core::repository::BlogRepository;
use tracing::info;

use crate::domain::commands::{CreateBlog, UpdateBlog};

/// Handles the `CreateBlog` command: inserts a blog authored by the caller.
///
/// This is a CREATION command. The store generates the blog id.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the insert fails.
pub async fn handle_create_blog(
    command: &CreateBlog,
    repo: &dyn BlogRepository,
) -> Result<Blog, DomainError> {
    let blog = repo
        .create(NewBlog {
            title: command.title.clone(),
            content: command.content.clone(),
            author_id: command.author_id.clone(),
        })
        .await?;

    info!(
        command_type = CreateBlog::NAME,
        correlation_id = %command.correlation_id(),
        blog_id = %blog.id,
        "blog created"
    );

    Ok(blog)
}

/// Handles the `UpdateBlog` command: replaces title and content of the blog
/// matching the command id.
///
/// # Errors
///
/// Returns `DomainError::BlogNotFound` if no blog has the command id.
/// Returns `DomainError::Infrastructure` if the update fails.
pub async fn handle_update_blog(
    command: &UpdateBlog,
    repo: &dyn BlogRepository,
) -> Result<Blog, DomainError> {
    let changes = BlogChanges {
        title: command.title.clone(),
        content: command.content.clone(),
    };

    let blog = repo
        .update(&command.id, changes)
        .await?
        .ok_or_else(|| DomainError::BlogNotFound(command.id.clone()))?;

    info!(
        command_type = UpdateBlog::NAME,
        correlation_id = %command.correlation_id(),
        blog_id = %blog.id,
        "blog edited"
    );

    Ok(blog)
}
