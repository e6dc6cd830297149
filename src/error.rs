//! Errors reported by fallible queue operations.

use std::collections::TryReserveError;
use thiserror::Error;

/// Error returned when a queue operation cannot be carried out.
///
/// A failed operation leaves the queue exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Allocating an element, or the copy of its string, failed.
    #[error("failed to allocate queue storage: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// The operation was given an absent queue handle.
    #[error("operation on an absent queue handle")]
    InvalidHandle,
}
