//! Allocation and relocation of the slot buffers backing a [`RingDeque`](crate::RingDeque).
//!
//! A buffer is a boxed slice of possibly uninitialized slots whose length is
//! always a power of two. The deque tracks which slots are live; this module
//! only knows how to obtain fresh buffers and how to move a (possibly wrapped)
//! run of live slots into one.

use alloc::alloc::Layout;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::ptr;

use crate::error::ReserveError;

/// Shorthand for `Box<[MaybeUninit<T>]>`, the slot array owned by a deque.
pub type HeapStorage<T> = Box<[MaybeUninit<T>]>;

/// Allocates a buffer of `capacity` uninitialized slots.
///
/// `capacity` must be a power of two.
pub(crate) fn allocate<T>(capacity: usize) -> Result<HeapStorage<T>, ReserveError> {
    debug_assert!(capacity.is_power_of_two());

    if Layout::array::<T>(capacity).is_err() {
        return Err(ReserveError::CapacityOverflow);
    }

    let mut slots = Vec::<MaybeUninit<T>>::new();
    slots.try_reserve_exact(capacity)?;
    // SAFETY: the capacity was just reserved, and `MaybeUninit<T>` does not
    // require initialization.
    unsafe {
        slots.set_len(capacity);
    }

    Ok(slots.into_boxed_slice())
}

/// Returns the capacity twice as large as `capacity`, or an error if that
/// cannot be represented.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> Result<usize, ReserveError> {
    capacity.checked_mul(2).ok_or(ReserveError::CapacityOverflow)
}

/// Copies the `len` live slots starting at physical index `front` of `src`
/// into `dst[..len]`, in logical order.
///
/// If the run does not wrap around the end of `src`, one contiguous copy
/// suffices. Otherwise the segment `[front, src.len())` is copied first and
/// the segment `[0, back)` right after it.
///
/// # Safety
/// The copied slots are bitwise duplicates. Callers must treat the slots in
/// `src` as uninitialized afterwards, and must ensure `dst.len() >= len`,
/// `len <= src.len()` and `front < src.len()`.
pub(crate) unsafe fn relocate<T>(
    src: &[MaybeUninit<T>],
    front: usize,
    len: usize,
    dst: &mut [MaybeUninit<T>],
) {
    debug_assert!(len <= src.len());
    debug_assert!(len <= dst.len());
    debug_assert!(front < src.len());

    let head = core::cmp::min(len, src.len() - front);
    let tail = len - head;

    ptr::copy_nonoverlapping(src.as_ptr().add(front), dst.as_mut_ptr(), head);
    ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr().add(head), tail);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> HeapStorage<i32> {
        let mut buf = allocate::<i32>(values.len()).unwrap();
        for (slot, &v) in buf.iter_mut().zip(values) {
            slot.write(v);
        }
        buf
    }

    fn read_prefix(buf: &[MaybeUninit<i32>], len: usize) -> Vec<i32> {
        buf[..len]
            .iter()
            .map(|slot| unsafe { slot.assume_init_read() })
            .collect()
    }

    #[test]
    fn allocate_powers_of_two() {
        for shift in 0..12 {
            let buf = allocate::<u64>(1 << shift).unwrap();
            assert_eq!(buf.len(), 1 << shift);
        }
    }

    #[test]
    fn allocate_zero_sized() {
        let huge = 1usize << (usize::BITS - 1);
        let buf = allocate::<()>(huge).unwrap();
        assert_eq!(buf.len(), huge);
    }

    #[test]
    fn allocate_rejects_oversized_layout() {
        let huge = 1usize << (usize::BITS - 2);
        assert_eq!(
            allocate::<u64>(huge).unwrap_err(),
            ReserveError::CapacityOverflow
        );
    }

    #[test]
    fn grown_capacity_overflows() {
        assert_eq!(grown_capacity(4), Ok(8));
        assert_eq!(
            grown_capacity(1 << (usize::BITS - 1)),
            Err(ReserveError::CapacityOverflow)
        );
    }

    #[test]
    fn relocate_unwrapped() {
        let src = filled(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let mut dst = allocate::<i32>(4).unwrap();
        unsafe { relocate(&src, 2, 3, &mut dst) };
        assert_eq!(read_prefix(&dst, 3), [2, 3, 4]);
    }

    #[test]
    fn relocate_run_ending_at_buffer_end() {
        let src = filled(&[0, 1, 2, 3]);
        let mut dst = allocate::<i32>(8).unwrap();
        unsafe { relocate(&src, 1, 3, &mut dst) };
        assert_eq!(read_prefix(&dst, 3), [1, 2, 3]);
    }

    #[test]
    fn relocate_wrapped() {
        let src = filled(&[4, 5, 6, 0, 1, 2, 3, 9]);
        let mut dst = allocate::<i32>(16).unwrap();
        unsafe { relocate(&src, 3, 7, &mut dst) };
        assert_eq!(read_prefix(&dst, 7), [0, 1, 2, 3, 9, 4, 5]);
    }

    #[test]
    fn relocate_full_wrapped_buffer() {
        // front == back, the state in which growth is triggered
        let src = filled(&[2, 3, 0, 1]);
        let mut dst = allocate::<i32>(8).unwrap();
        unsafe { relocate(&src, 2, 4, &mut dst) };
        assert_eq!(read_prefix(&dst, 4), [0, 1, 2, 3]);
    }

    #[test]
    fn relocate_nothing() {
        let src = filled(&[7, 7]);
        let mut dst = allocate::<i32>(1).unwrap();
        unsafe { relocate(&src, 1, 0, &mut dst) };
    }
}
