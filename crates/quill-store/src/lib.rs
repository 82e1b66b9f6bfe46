//! Quill Store — PostgreSQL adapter for the blog repository port.

pub mod pg_blog_repository;
pub mod schema;
