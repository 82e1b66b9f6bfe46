//! Quill — Blog authoring bounded context.
//!
//! Responsible for checking blog request bodies against their input schemas
//! and for orchestrating create, update and read operations against the
//! blog repository.

pub mod application;
pub mod domain;
