use std::collections::TryReserveError;

use thiserror::Error;

/// Error types for `RingQueue` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum QueueError {
    /// Capacity must be at least 1
    #[error("invalid capacity: {capacity} (must be at least 1)")]
    InvalidCapacity {
        /// Capacity that was requested
        capacity: usize,
    },
    /// Growth rate is a percentage multiplier and must exceed 100
    #[error("invalid growth rate: {growth_rate} (must be greater than 100)")]
    InvalidGrowthRate {
        /// Growth rate that was requested
        growth_rate: usize,
    },
    /// The buffer is full and capacity growth is locked
    #[error("queue is full and its capacity is locked")]
    Locked,
    /// Operation requires at least one element
    #[error("queue is empty")]
    Empty,
    /// Buffer reallocation failed; the queue was left unchanged
    #[error("buffer reallocation failed")]
    AllocationFailure(#[from] TryReserveError),
    /// The queue was structurally modified after the cursor was created
    #[error("stale cursor: the queue was modified after the cursor was created")]
    StaleCursor,
}

/// Error returned by a rejected `enqueue`. Ownership of the element travels
/// back to the caller; the queue never drops input it did not accept.
#[derive(Error, Debug)]
#[error("enqueue rejected: {reason}")]
pub struct EnqueueError<T> {
    /// The rejected element
    pub element: T,
    /// Why the enqueue failed
    pub reason: QueueError,
}

impl<T> EnqueueError<T> {
    /// Recovers ownership of the rejected element.
    #[must_use]
    pub fn into_element(self) -> T {
        self.element
    }
}
