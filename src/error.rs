//! Errors reported when the ring buffer cannot grow.

use alloc::collections::TryReserveError;
use thiserror::Error;

/// The reason a buffer reallocation failed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ReserveError {
    /// The requested capacity exceeds `usize::MAX`, or the buffer would be
    /// larger than `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator refused to provide the requested memory.
    #[error("memory allocation failed: {0}")]
    AllocFailed(#[from] TryReserveError),
}

/// The error returned by [`try_push_front`](crate::RingDeque::try_push_front)
/// and [`try_push_back`](crate::RingDeque::try_push_back).
///
/// Holds on to the value that could not be inserted, so ownership is never
/// lost on failure.
#[derive(Error, Debug)]
#[error("failed to grow deque: {source}")]
pub struct TryPushError<T> {
    value: T,
    source: ReserveError,
}

impl<T> TryPushError<T> {
    pub(crate) fn new(value: T, source: ReserveError) -> Self {
        TryPushError { value, source }
    }

    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the reason the insertion failed.
    pub fn reason(&self) -> &ReserveError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn push_error_returns_value() {
        let err = TryPushError::new('x', ReserveError::CapacityOverflow);
        assert_eq!(err.reason(), &ReserveError::CapacityOverflow);
        assert_eq!(err.to_string(), "failed to grow deque: capacity overflow");
        assert_eq!(err.into_inner(), 'x');
    }
}
