//! Error types for container operations.
//!
//! Every variant describes a violated precondition. Errors are reported at the
//! call that caused them and the container is left exactly as it was.

use thiserror::Error;

/// Error returned by container and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Indexed access outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Cursor `remove()` without a successful `next()` since creation or since
    /// the previous removal.
    #[error("cannot remove: call next() first")]
    IllegalState,

    /// Cursor `next()` past the last element.
    #[error("no more elements")]
    Exhausted,

    /// A container was requested with an initial capacity of zero.
    #[error("initial capacity must be greater than zero")]
    InvalidCapacity,
}

/// Result type for container operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

static_assertions::assert_impl_all!(Error: Send, Sync, core::error::Error);
