//! Error type shared by the queue and its element types.

use thiserror::Error;

/// Failures reported by [`BoundedPriorityQueue`](crate::BoundedPriorityQueue),
/// [`ListElement`](crate::ListElement) and [`Point`](crate::Point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside of its valid domain, e.g. a negative capacity,
    /// a NaN value or a point without coordinates.
    #[error("Invalid argument")]
    InvalidArgument,

    /// The queue cannot accept the element: its capacity is zero or the element is
    /// not smaller than the current maximum of a full queue.
    #[error("Queue is full")]
    Full,

    /// An element was required but the queue is empty.
    #[error("Queue is empty")]
    Empty,

    /// Growing the queue's storage failed.
    #[error("Out of memory")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
