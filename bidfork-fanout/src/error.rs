//! Error types for the fan-out layer.

use thiserror::Error;

/// Result type for fan-out operations.
pub type FanoutResult<T> = Result<T, FanoutError>;

/// Errors that can occur when forking a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FanoutError {
    /// The participant list was empty.
    #[error("no participants to fork for")]
    NoParticipants,

    /// More participants than the configured limit.
    #[error("too many participants: {count} exceeds limit of {max}")]
    TooManyParticipants { count: usize, max: usize },

    /// The same participant appeared twice.
    #[error("duplicate participant: {0}")]
    DuplicateParticipant(String),

    /// Invalid or unparseable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
