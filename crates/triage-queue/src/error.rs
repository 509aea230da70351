//! Error types for patient queue operations.

use thiserror::Error;

/// Errors that can occur during patient queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `peek` or `remove` was called with nobody waiting.
    #[error("no patients in the queue")]
    EmptyQueue,
}

/// Result type alias for patient queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
