//! Growable contiguous sequence on top of an [`OwnedBuffer`].
//!
//! [`SimpleVector<T>`] tracks a logical length over a buffer whose every slot
//! holds a live `T`. Slots past the length are logically absent: they keep
//! default values or whatever was left there by `clear`, `pop_back`, `erase`
//! or a shrinking `resize`, and are overwritten before they become visible
//! again.
//!
//! Every growing operation first builds the complete replacement buffer and
//! only then swaps it in, so a failed allocation (reported by the `try_*`
//! forms) leaves the vector exactly as it was.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::{
    CapacityRequest, Result, config,
    error::Error,
    owned_buffer::OwnedBuffer,
    result::{or_raise, verify_index},
    transfer::{Cloned, Take, Transfer},
};

/// A growable, contiguous, random-access sequence.
///
/// # Growth
///
/// - `push_back` into a full vector grows to `max(1, 2 * capacity)`.
/// - `insert` into a full vector grows to `max(len + 1, 2 * capacity)`.
/// - `resize` past the capacity grows to `max(new_size, 2 * capacity)`.
/// - `reserve` grows to exactly the requested capacity and never shrinks.
///
/// Nothing ever shrinks the capacity except replacing the whole vector.
///
/// # Positions
///
/// Positions are plain indices in `[0, len]`; `insert` and `erase` return the
/// index of the element they leave at the affected position. Borrowed
/// iterators and slices cannot outlive a mutating call, so they can never
/// observe a reallocated buffer.
///
/// # Element requirements
///
/// Operations that create slots (`with_size`, `reserve`, `resize`,
/// `push_back`, `insert`) need `T: Default`, because every slot of the
/// backing buffer is always initialized. Copying operations need `T: Clone`.
pub struct SimpleVector<T> {
    buffer: OwnedBuffer<T>,
    /// Number of live elements, never greater than `buffer.capacity()`.
    len: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            buffer: OwnedBuffer::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.as_mut_slice()[..len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the element at `index`, or `OutOfRange` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.len)?;
        Ok(&self.buffer[index])
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.len)?;
        Ok(&mut self.buffer[index])
    }

    /// Sets the length to zero. The capacity and the buffer contents are kept;
    /// the former elements stay in their slots until overwritten or until the
    /// buffer is released.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Hides the last element without releasing anything.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        self.len -= 1;
    }

    /// Removes the element at `index`, shifting the following elements one
    /// slot to the left.
    ///
    /// Returns `index`, which now holds the element that followed the removed
    /// one, or equals `len()` if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index (is {index}) should be < len (is {})",
            self.len
        );
        let len = self.len;
        self.buffer.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Exchanges the contents of two vectors in O(1) without touching the
    /// elements.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving an empty vector with zero capacity.
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        or_raise(Self::try_with_size(size))
    }

    pub fn try_with_size(size: usize) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwnedBuffer::try_with_default(size)?,
            len: size,
        })
    }

    /// Creates an empty vector with exactly the requested capacity.
    pub fn reserved(request: CapacityRequest) -> SimpleVector<T> {
        or_raise(Self::try_reserved(request))
    }

    pub fn try_reserved(request: CapacityRequest) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwnedBuffer::try_with_default(request.capacity())?,
            len: 0,
        })
    }

    /// Grows the capacity to exactly `new_capacity` if it is currently
    /// smaller. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        or_raise(self.try_reserve(new_capacity))
    }

    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity)?;
        }
        Ok(())
    }

    /// Changes the length to `new_size`.
    ///
    /// Shrinking only hides the trailing elements. Growing exposes slots that
    /// are all reset to `T::default()`, reallocating to
    /// `max(new_size, 2 * capacity)` when the capacity is insufficient.
    pub fn resize(&mut self, new_size: usize) {
        or_raise(self.try_resize(new_size))
    }

    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size <= self.len {
            self.len = new_size;
        } else if new_size <= self.capacity() {
            // Hidden slots may hold stale values.
            self.buffer.as_mut_slice()[self.len..new_size].fill_with(T::default);
            self.len = new_size;
        } else {
            let new_capacity = config::resize_capacity(new_size, self.capacity())
                .ok_or_else(|| Error::capacity_overflow(new_size))?;
            // Slots past `len` in the new buffer are freshly defaulted.
            self.relocate(new_capacity)?;
            self.len = new_size;
        }
        Ok(())
    }

    /// Appends `value`, doubling the capacity (or growing to one) if the
    /// vector is full.
    pub fn push_back(&mut self, value: T) {
        or_raise(self.try_push_back(value))
    }

    /// Fallible [`push_back`](Self::push_back). On error the vector is
    /// unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.push_with(Take(value))
    }

    /// Inserts `value` at `index`, shifting the elements at and after it one
    /// slot to the right. `index == len()` appends.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        or_raise(self.try_insert(index, value))
    }

    /// Fallible [`insert`](Self::insert). On error the vector is unchanged and
    /// `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        self.insert_with(index, Take(value))
    }

    /// Moves the live elements into a `Vec`, consuming the vector.
    pub fn into_vec(mut self) -> Vec<T> {
        self.iter_mut().map(std::mem::take).collect()
    }

    fn push_with(&mut self, item: impl Transfer<T>) -> Result<()> {
        // Materialize first so a panicking clone leaves the vector untouched.
        let value = item.into_element();
        if self.len == self.capacity() {
            let new_capacity = config::push_capacity(self.capacity())
                .ok_or_else(|| Error::capacity_overflow(self.len.saturating_add(1)))?;
            self.relocate(new_capacity)?;
        }
        self.buffer[self.len] = value;
        self.len += 1;
        Ok(())
    }

    fn insert_with(&mut self, index: usize, item: impl Transfer<T>) -> Result<usize> {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        let value = item.into_element();
        let len = self.len;
        if self.capacity() == 0 {
            let mut fresh = OwnedBuffer::try_with_default(config::MIN_NON_ZERO_CAPACITY)?;
            fresh[index] = value;
            self.adopt(fresh);
        } else if len < self.capacity() {
            let slots = self.buffer.as_mut_slice();
            slots[len] = value;
            slots[index..=len].rotate_right(1);
        } else {
            let new_capacity = config::insert_capacity(len, self.capacity())
                .ok_or_else(|| Error::capacity_overflow(len.saturating_add(1)))?;
            let mut fresh = OwnedBuffer::try_with_default(new_capacity)?;
            let old = self.buffer.as_mut_slice();
            let slots = fresh.as_mut_slice();
            slots[..index].swap_with_slice(&mut old[..index]);
            slots[index] = value;
            slots[index + 1..=len].swap_with_slice(&mut old[index..len]);
            self.adopt(fresh);
        }
        self.len += 1;
        Ok(index)
    }

    /// Moves the live elements into a fresh buffer of `new_capacity`
    /// default-valued slots and adopts it.
    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = OwnedBuffer::try_with_default(new_capacity)?;
        let len = self.len;
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.buffer.as_mut_slice()[..len]);
        self.adopt(fresh);
        Ok(())
    }

    /// Replaces the backing buffer, releasing the old one.
    fn adopt(&mut self, fresh: OwnedBuffer<T>) {
        log::trace!(
            "SimpleVector: reallocated {} -> {} slots ({} live)",
            self.capacity(),
            fresh.capacity(),
            self.len
        );
        self.buffer = fresh;
    }
}

impl<T: Default + Clone> SimpleVector<T> {
    /// Appends a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T) {
        or_raise(self.try_push_back_cloned(value))
    }

    pub fn try_push_back_cloned(&mut self, value: &T) -> Result<()> {
        self.push_with(Cloned(value))
    }

    /// Inserts a clone of `value` at `index`; see [`insert`](Self::insert).
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> usize {
        or_raise(self.try_insert_cloned(index, value))
    }

    pub fn try_insert_cloned(&mut self, index: usize, value: &T) -> Result<usize> {
        self.insert_with(index, Cloned(value))
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `size` clones of `value`.
    pub fn from_value(size: usize, value: T) -> SimpleVector<T> {
        or_raise(Self::try_from_value(size, value))
    }

    pub fn try_from_value(size: usize, value: T) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwnedBuffer::try_from_fn(size, |_| value.clone())?,
            len: size,
        })
    }

    /// Deep copy whose capacity equals the source length.
    pub fn try_clone(&self) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            buffer: OwnedBuffer::try_from_exact_iter(self.iter().cloned())?,
            len: self.len,
        })
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// The copy does not inherit the spare capacity of the source.
    fn clone(&self) -> Self {
        or_raise(self.try_clone())
    }

    /// Copy-and-swap: the copy is built completely before the old contents
    /// are given up, so a panicking `T::clone` leaves `self` untouched. An
    /// empty source only clears `self`.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
            return;
        }
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> std::ops::Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> std::ops::IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Default + Clone + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back_cloned(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVector {
            buffer: OwnedBuffer::from_exact_iter(values),
            len: N,
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        SimpleVector {
            buffer: OwnedBuffer::from_exact_iter(values),
            len,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector {
            buffer: OwnedBuffer::from_exact_iter(values.iter().cloned()),
            len: values.len(),
        }
    }
}

impl<T: Default> From<CapacityRequest> for SimpleVector<T> {
    fn from(request: CapacityRequest) -> Self {
        SimpleVector::reserved(request)
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T, U> PartialEq<[U]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}
