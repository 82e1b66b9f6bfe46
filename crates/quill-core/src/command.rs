//! Command abstractions.

use uuid::Uuid;

/// A write against the blog store.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name logged as the `command_type` field.
    const NAME: &'static str;

    /// Correlation ID shared by every log line this command produces.
    fn correlation_id(&self) -> Uuid;
}
