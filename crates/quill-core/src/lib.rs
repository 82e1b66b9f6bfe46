//! Quill Core — shared domain abstractions.
//!
//! This crate defines the record types, the persistence port, and the error
//! type that the blog context and its adapters depend on. It contains no
//! infrastructure code.

pub mod blog;
pub mod command;
pub mod error;
pub mod repository;
