//! Queue error types.

use std::fmt;
use thiserror::Error;

/// Errors from queue operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Non-blocking push against a full queue.
    #[error("Queue full: capacity {capacity} reached")]
    CapacityExceeded {
        /// Fixed capacity of the queue
        capacity: usize,
    },

    /// The queue was closed; the operation is terminal.
    #[error("Queue closed")]
    Closed,

    /// Invalid construction parameters.
    #[error("Invalid queue configuration: {0}")]
    Config(String),
}

/// A rejected push. Hands the item back to the caller.
pub struct PushError<T> {
    /// Why the push was rejected.
    pub error: QueueError,
    /// The item that was not enqueued.
    pub item: T,
}

impl<T> PushError<T> {
    pub(crate) fn new(error: QueueError, item: T) -> Self {
        Self { error, item }
    }

    /// Recover the rejected item.
    pub fn into_inner(self) -> T {
        self.item
    }

    /// True if the push failed because the queue was full.
    pub fn is_full(&self) -> bool {
        matches!(self.error, QueueError::CapacityExceeded { .. })
    }

    /// True if the push failed because the queue was closed.
    pub fn is_closed(&self) -> bool {
        self.error == QueueError::Closed
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> std::error::Error for PushError<T> {}

impl<T> From<PushError<T>> for QueueError {
    fn from(err: PushError<T>) -> Self {
        err.error
    }
}
