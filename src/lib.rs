#![no_std]
#![warn(missing_docs)]

//! A growable double-ended queue backed by a single power-of-two ring buffer.
//!
//! [`RingDeque`] supports amortized O(1) insertion and removal at both ends.
//! The buffer doubles when an insertion finds it full, and halves when a
//! removal leaves it less than a quarter occupied.
//!
//! The deque is not synchronized; sharing it across threads requires external
//! locking like any other `&mut`-mutated collection.

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "ringdeque::storage", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub mod deque;
pub mod error;
mod storage;

pub use crate::deque::RingDeque;
pub use crate::error::{ReserveError, TryPushError};
