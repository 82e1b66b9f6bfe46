//! Domain types for the blog context.

pub mod commands;
pub mod inputs;
