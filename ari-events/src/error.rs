//! Error types for the event bus

use thiserror::Error;

/// Errors that can occur during event registration and dispatch
#[derive(Debug, Error)]
pub enum EventError {
    /// The bus registry lock was poisoned by a panicking callback holder
    #[error("Event bus lock poisoned")]
    LockPoisoned,

    /// An event payload carried no `type` field
    #[error("Event payload has no type field")]
    MissingEventType,

    /// An event payload carried a `type` this SDK does not route
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
}

/// Type alias for results that can return an EventError
pub type Result<T> = std::result::Result<T, EventError>;
