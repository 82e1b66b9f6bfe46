//! Route modules.

pub mod blog;
pub mod health;
