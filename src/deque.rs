//! A growable double-ended queue implemented with a power-of-two ring buffer.
//!
//! This queue has amortized O(1) inserts and removals from both ends of the
//! sequence, and O(1) indexing like a vector.

use alloc::alloc::{handle_alloc_error, Layout};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::error::{ReserveError, TryPushError};
use crate::storage::{self, HeapStorage};

/// A double-ended queue implemented with a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use [`push_back`](RingDeque::push_back)
/// to add to the queue, and [`pop_front`](RingDeque::pop_front) to remove from it.
///
/// The capacity is always a power of two, so wrapping an index around the end
/// of the buffer is a single bitwise AND. An insertion into a full deque
/// doubles the capacity; a removal that leaves fewer than a quarter of the
/// slots occupied (and more than one element) halves it. The gap between the
/// two thresholds keeps alternating pushes and pops from reallocating on
/// every call.
///
/// # Examples
/// ```
/// use ringdeque::RingDeque;
///
/// let mut deque = RingDeque::new();
/// for i in 1..=5 {
///     deque.push_front(i);
/// }
/// for i in 6..=9 {
///     deque.push_back(i);
/// }
/// assert_eq!(deque.to_string(), "[5 4 3 2 1 6 7 8 9]");
/// assert_eq!(deque.pop_front(), Some(5));
/// assert_eq!(deque.pop_back(), Some(9));
/// ```
pub struct RingDeque<T> {
    // push_back writes to buf[back] and then advances back; push_front
    // retreats front and then writes to buf[front].
    buf: HeapStorage<T>,
    front: usize,
    back: usize,
    len: usize,
}

#[inline(never)]
#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline(never)]
#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index)
}

#[inline(never)]
#[cold]
fn reserve_failed<T>(err: &ReserveError, capacity: usize) -> ! {
    match err {
        ReserveError::CapacityOverflow => capacity_overflow(),
        ReserveError::AllocFailed(_) => match Layout::array::<T>(capacity) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => capacity_overflow(),
        },
    }
}

impl<T> RingDeque<T> {
    /// Creates an empty deque with a single slot.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::<u32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty deque with room for at least `capacity` elements.
    ///
    /// The capacity is rounded up to the next power of two; a request for
    /// zero slots yields one.
    ///
    /// # Panics
    /// Panics if the rounded capacity overflows `usize`, and aborts if the
    /// allocation fails.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::RingDeque::<char>::with_capacity(10);
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = match capacity.max(1).checked_next_power_of_two() {
            Some(c) => c,
            None => capacity_overflow(),
        };

        let buf = match storage::allocate::<T>(capacity) {
            Ok(buf) => buf,
            Err(err) => reserve_failed::<T>(&err, capacity),
        };

        RingDeque {
            buf,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Returns the number of elements the deque can hold before it reallocates.
    ///
    /// This is always a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn is_sparse(&self) -> bool {
        1 < self.len && self.len < self.capacity() / 4
    }

    #[inline(always)]
    fn next(&self, i: usize) -> usize {
        (i + 1) & (self.capacity() - 1)
    }

    #[inline(always)]
    fn previous(&self, i: usize) -> usize {
        i.wrapping_sub(1) & (self.capacity() - 1)
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        Some((self.front + index) & (self.capacity() - 1))
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(0);
    /// deque.push_front(1);
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let index = self.physical_index(index)?;
        unsafe { Some(self.buf[index].assume_init_ref()) }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = self.physical_index(index)?;
        unsafe { Some(self.buf[index].assume_init_mut()) }
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.previous(self.back);
        unsafe { Some(self.buf[idx].assume_init_ref()) }
    }

    /// Returns a mutable reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.previous(self.back);
        unsafe { Some(self.buf[idx].assume_init_mut()) }
    }

    /// Prepends an element to the front of the deque, returning an error that
    /// hands `value` back if the buffer needed to grow and could not.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// assert!(deque.try_push_front(1).is_ok());
    /// assert!(deque.try_push_front(2).is_ok());
    /// assert_eq!(deque.front(), Some(&2));
    /// ```
    pub fn try_push_front(&mut self, value: T) -> Result<(), TryPushError<T>> {
        if let Err(err) = self.grow_if_full() {
            return Err(TryPushError::new(value, err));
        }

        self.front = self.previous(self.front);
        self.buf[self.front].write(value);
        self.len += 1;

        Ok(())
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`, and aborts if the
    /// allocation fails. See [`try_push_front`](RingDeque::try_push_front)
    /// for a checked variant.
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            reserve_failed::<T>(err.reason(), self.capacity().wrapping_mul(2));
        }
    }

    /// Appends an element to the back of the deque, returning an error that
    /// hands `value` back if the buffer needed to grow and could not.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// assert!(deque.try_push_back(1).is_ok());
    /// assert!(deque.try_push_back(2).is_ok());
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<(), TryPushError<T>> {
        if let Err(err) = self.grow_if_full() {
            return Err(TryPushError::new(value, err));
        }

        self.buf[self.back].write(value);
        self.back = self.next(self.back);
        self.len += 1;

        Ok(())
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`, and aborts if the
    /// allocation fails. See [`try_push_back`](RingDeque::try_push_back)
    /// for a checked variant.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            reserve_failed::<T>(err.reason(), self.capacity().wrapping_mul(2));
        }
    }

    /// Removes the first element and returns it, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let result = self.take_front()?;
        self.shrink_if_sparse();
        Some(result)
    }

    /// Removes the last element and returns it, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let result = self.take_back()?;
        self.shrink_if_sparse();
        Some(result)
    }

    // Moves the front element out, leaving its slot uninitialized. Never resizes.
    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let result = unsafe { self.buf[self.front].assume_init_read() };
        self.front = self.next(self.front);
        self.len -= 1;

        Some(result)
    }

    // Moves the back element out, leaving its slot uninitialized. Never resizes.
    fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.back = self.previous(self.back);
        let result = unsafe { self.buf[self.back].assume_init_read() };
        self.len -= 1;

        Some(result)
    }

    /// Drops all elements and returns the deque to its initial single-slot
    /// state, releasing the old buffer.
    ///
    /// # Examples
    /// ```
    /// let mut deque: ringdeque::RingDeque<i32> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 1);
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn grow_if_full(&mut self) -> Result<(), ReserveError> {
        if self.is_full() {
            let capacity = storage::grown_capacity(self.capacity())?;
            self.resize(capacity)?;
        }

        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        if self.is_sparse() {
            let capacity = self.capacity() / 2;
            if let Err(_err) = self.resize(capacity) {
                // the larger buffer still holds every element
                trace!(capacity, error = %_err, "failed to shrink ring buffer");
            }
        }
    }

    // Moves the live elements to the start of a fresh buffer of `capacity` slots.
    fn resize(&mut self, capacity: usize) -> Result<(), ReserveError> {
        debug_assert!(capacity > self.len);

        let mut buf = storage::allocate::<T>(capacity)?;
        unsafe {
            storage::relocate(&self.buf, self.front, self.len, &mut buf);
        }

        trace!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "resized ring buffer"
        );

        // The old slots are `MaybeUninit`, so dropping the old buffer does not
        // drop the elements that now live in `buf`.
        self.buf = buf;
        self.front = 0;
        self.back = self.len;

        Ok(())
    }

    #[inline]
    fn split_lengths(&self) -> (usize, usize) {
        let head = core::cmp::min(self.len, self.capacity() - self.front);
        (head, self.len - head)
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// The second slice is empty unless the elements wrap around the end of
    /// the buffer.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::with_capacity(4);
    /// deque.push_back(0);
    /// deque.push_back(1);
    /// deque.push_front(10);
    /// deque.push_front(9);
    /// assert_eq!(deque.as_slices(), (&[9, 10][..], &[0, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head, tail) = self.split_lengths();
        let ptr = self.buf.as_ptr().cast::<T>();
        unsafe {
            (
                core::slice::from_raw_parts(ptr.add(self.front), head),
                core::slice::from_raw_parts(ptr, tail),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (head, tail) = self.split_lengths();
        let ptr = self.buf.as_mut_ptr().cast::<T>();
        unsafe {
            (
                core::slice::from_raw_parts_mut(ptr.add(self.front), head),
                core::slice::from_raw_parts_mut(ptr, tail),
            )
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// The iterator borrows the deque immutably, so it can be created any
    /// number of times without affecting the contents.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&3));
    /// assert!(it.next().is_none());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: &self.buf,
            front: self.front,
            len: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::RingDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, &[2, 3, 1]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.as_mut_slices();
        IterMut {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        let (front, back) = self.as_mut_slices();
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut result = Self::with_capacity(self.len);
        result.extend(self.iter().cloned());
        result
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(x) => x,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(x) => x,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

/// Renders the elements front to back, separated by spaces: `[a b c]`.
impl<T: Display> Display for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // element by element, so the wrap point never shows up in the writes
        self.len.hash(state);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for RingDeque<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                let other: &[U] = &other[..];
                if self.len != other.len() {
                    return false;
                }

                let (front, back) = self.as_slices();
                let (other_front, other_back) = other.split_at(front.len());
                front == other_front && back == other_back
            }
        }
    };
}

impl_slice_eq! { [] alloc::vec::Vec<U> }
impl_slice_eq! { [] &[U] }
impl_slice_eq! { [] &mut [U] }
impl_slice_eq! { [const N: usize] [U; N] }
impl_slice_eq! { [const N: usize] &[U; N] }

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for RingDeque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter()
            .for_each(|item| self.push_back(item.clone()));
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let iter = iter.into_iter();
        let mut result = Self::with_capacity(iter.size_hint().0);
        result.extend(iter);
        result
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](RingDeque::iter) method on [`RingDeque`].
/// See its documentation for more.
pub struct Iter<'a, T> {
    buf: &'a [MaybeUninit<T>],
    front: usize,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            buf: self.buf,
            front: self.front,
            len: self.len,
        }
    }
}

impl<'a, T: 'a + Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let front = self.front;
        self.front = (front + 1) & (self.buf.len() - 1);
        self.len -= 1;
        unsafe { Some(self.buf[front].assume_init_ref()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        let idx = (self.front + self.len - 1) & (self.buf.len() - 1);
        self.len -= 1;
        unsafe { Some(self.buf[idx].assume_init_ref()) }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the elements of a deque that returns mutable references.
///
/// This `struct` is created by the [`iter_mut`](RingDeque::iter_mut) method on [`RingDeque`].
/// See its documentation for more.
pub struct IterMut<'a, T> {
    head: core::slice::IterMut<'a, T>,
    tail: core::slice::IterMut<'a, T>,
}

impl<'a, T: 'a + Debug> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.head.as_slice())
            .field(&self.tail.as_slice())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.head.next() {
            Some(x) => Some(x),
            None => self.tail.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.tail.next_back() {
            Some(x) => Some(x),
            None => self.head.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator that moves out of a deque.
///
/// This `struct` is created by the `into_iter` method on [`RingDeque`].
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    deque: RingDeque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
