//! Blog record types shared between the blog context and its stores.

use serde::{Deserialize, Serialize};

/// A persisted blog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Store-generated identifier.
    pub id: String,
    /// Blog title.
    pub title: String,
    /// Blog body.
    pub content: String,
    /// Identifier of the authoring user. Owned by the external auth component.
    pub author_id: String,
}

/// Fields supplied when creating a blog. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    /// Blog title.
    pub title: String,
    /// Blog body.
    pub content: String,
    /// Identifier of the authoring user.
    pub author_id: String,
}

/// Mutable fields of an existing blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogChanges {
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub content: String,
}

/// Filter for listing blogs. An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogFilter {
    /// Match rows with exactly this id.
    #[serde(default)]
    pub id: Option<String>,
}

impl BlogFilter {
    /// Filter matching the blog with the given id.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    /// Returns `true` if `blog` satisfies this filter.
    #[must_use]
    pub fn matches(&self, blog: &Blog) -> bool {
        self.id.as_deref().is_none_or(|id| id == blog.id)
    }
}
