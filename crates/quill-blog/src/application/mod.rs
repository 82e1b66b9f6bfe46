//! Application services for the blog context.

pub mod command_handlers;
pub mod query_handlers;
