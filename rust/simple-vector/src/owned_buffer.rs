//! Fixed-size heap buffer with exclusive ownership.
//!
//! [`OwnedBuffer`] owns exactly one contiguous allocation holding `capacity`
//! fully initialized elements. It has no growth logic of its own: a larger
//! buffer is obtained by building a new one and swapping it into place, which
//! is what [`SimpleVector`](crate::SimpleVector) does.
//!
//! # Safety
//!
//! Every slot in `[0, capacity)` holds a live `T` for the whole lifetime of the
//! buffer. Construction either initializes all slots or releases everything it
//! has built so far (including when the element constructor panics), and
//! dropping the buffer drops every slot exactly once before releasing the
//! allocation.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Result, error::Error};

/// An exclusively owned heap allocation of `capacity` initialized elements.
///
/// A zero capacity never touches the allocator. Zero-sized element types never
/// touch it either, whatever the capacity.
///
/// The buffer cannot be cloned; ownership moves with the value, and
/// [`take`](OwnedBuffer::take) / [`swap`](OwnedBuffer::swap) transfer it
/// between two live handles in O(1).
pub struct OwnedBuffer<T> {
    /// Start of the allocation; dangling when nothing was allocated.
    ptr: NonNull<T>,
    /// Number of initialized slots.
    capacity: usize,
    _p: PhantomData<T>,
}

// The buffer owns its elements the same way `Box<[T]>` does.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}

impl<T> OwnedBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub const fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            ptr: NonNull::dangling(),
            capacity: 0,
            _p: PhantomData,
        }
    }

    /// Allocates `capacity` slots and initializes slot `i` with `f(i)`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityOverflow` if the allocation size is not representable,
    /// or `AllocationFailure` if the allocator cannot satisfy the request.
    /// Nothing is leaked in either case.
    pub fn try_from_fn<F>(capacity: usize, mut f: F) -> Result<OwnedBuffer<T>>
    where
        F: FnMut(usize) -> T,
    {
        let mut partial = PartialBuffer::allocate(capacity)?;
        while partial.initialized < capacity {
            let value = f(partial.initialized);
            partial.push(value);
        }
        Ok(partial.finish())
    }

    /// Moves the items of an exact-size iterator into a buffer of matching
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields fewer items than its reported length.
    /// Extra items are ignored.
    pub fn try_from_exact_iter<I>(iter: I) -> Result<OwnedBuffer<T>>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let capacity = iter.len();
        let mut partial = PartialBuffer::allocate(capacity)?;
        while partial.initialized < capacity {
            match iter.next() {
                Some(value) => partial.push(value),
                None => panic!(
                    "iterator yielded {} items but reported {capacity}",
                    partial.initialized
                ),
            }
        }
        Ok(partial.finish())
    }

    /// Same as [`try_from_exact_iter`](Self::try_from_exact_iter), escalating
    /// allocation errors.
    pub fn from_exact_iter<I>(iter: I) -> OwnedBuffer<T>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>,
    {
        crate::result::or_raise(Self::try_from_exact_iter(iter))
    }

    /// Number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// All `capacity` slots, live or stale alike.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `capacity` initialized elements (or is a
        // well-aligned dangling pointer with `capacity == 0` or a ZST).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Exchanges the allocations of two buffers of any capacity.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(self, other);
    }

    /// Moves the allocation out, leaving an empty buffer behind.
    #[inline]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        std::mem::replace(self, OwnedBuffer::new())
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocates `capacity` default-valued slots.
    pub fn try_with_default(capacity: usize) -> Result<OwnedBuffer<T>> {
        Self::try_from_fn(capacity, |_| T::default())
    }

    /// Same as [`try_with_default`](Self::try_with_default), escalating
    /// allocation errors.
    pub fn with_default(capacity: usize) -> OwnedBuffer<T> {
        crate::result::or_raise(Self::try_with_default(capacity))
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: every slot is initialized and is dropped exactly once here;
        // the layout matches the one used by `PartialBuffer::allocate`.
        unsafe {
            std::ptr::drop_in_place(std::ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.capacity,
            ));
            release(self.ptr, self.capacity);
        }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> std::ops::IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("slots", &self.as_slice())
            .field("cap", &self.capacity)
            .finish()
    }
}

/// An allocation under construction. Dropping it (normally or while
/// unwinding from a panicking element constructor) drops the initialized
/// prefix and releases the memory.
struct PartialBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    initialized: usize,
}

impl<T> PartialBuffer<T> {
    fn allocate(capacity: usize) -> Result<PartialBuffer<T>> {
        let layout =
            Layout::array::<T>(capacity).map_err(|_| Error::capacity_overflow(capacity))?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: the layout has a non-zero size.
            let raw = unsafe { alloc::alloc(layout) } as *mut T;
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => {
                    log::debug!(
                        "allocation of {} bytes for {capacity} elements failed",
                        layout.size()
                    );
                    return Err(Error::allocation_failure(capacity, layout));
                }
            }
        };
        Ok(PartialBuffer {
            ptr,
            capacity,
            initialized: 0,
        })
    }

    #[inline]
    fn push(&mut self, value: T) {
        assert!(self.initialized < self.capacity);
        // SAFETY: the slot is inside the allocation and not yet initialized.
        unsafe { self.ptr.as_ptr().add(self.initialized).write(value) };
        self.initialized += 1;
    }

    fn finish(self) -> OwnedBuffer<T> {
        assert_eq!(self.initialized, self.capacity);
        let this = std::mem::ManuallyDrop::new(self);
        OwnedBuffer {
            ptr: this.ptr,
            capacity: this.capacity,
            _p: PhantomData,
        }
    }
}

impl<T> Drop for PartialBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` leading slots hold live values.
        unsafe {
            std::ptr::drop_in_place(std::ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
            release(self.ptr, self.capacity);
        }
    }
}

/// Returns an allocation obtained for `capacity` elements to the allocator.
///
/// # Safety
///
/// `ptr` must come from `PartialBuffer::allocate(capacity)` and must not be
/// used afterwards.
unsafe fn release<T>(ptr: NonNull<T>, capacity: usize) {
    let Ok(layout) = Layout::array::<T>(capacity) else {
        return;
    };
    if layout.size() != 0 {
        unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        let buf = OwnedBuffer::<u64>::with_default(0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn test_default_initialized() {
        let buf = OwnedBuffer::<i32>::with_default(16);
        assert_eq!(buf.capacity(), 16);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_fn_and_indexing() {
        let mut buf = OwnedBuffer::try_from_fn(5, |i| i * 10).unwrap();
        assert_eq!(buf[3], 30);
        buf[3] = 7;
        assert_eq!(buf.as_slice(), &[0, 10, 20, 7, 40]);
    }

    #[test]
    fn test_swap_different_capacities() {
        let mut a = OwnedBuffer::try_from_fn(2, |i| i as u8).unwrap();
        let mut b = OwnedBuffer::try_from_fn(5, |i| 10 + i as u8).unwrap();
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.capacity(), 5);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
        assert_eq!(a[0], 10);
        assert_eq!(b[1], 1);
    }

    #[test]
    fn test_take_leaves_empty_source() {
        let mut a = OwnedBuffer::<String>::with_default(3);
        let b = a.take();
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_drop_releases_every_slot() {
        let drops = Rc::new(Cell::new(0));
        let buf = OwnedBuffer::try_from_fn(4, |_| Counted(drops.clone())).unwrap();
        assert_eq!(drops.get(), 0);
        drop(buf);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_panicking_constructor_drops_prefix() {
        let drops = Rc::new(Cell::new(0));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            OwnedBuffer::try_from_fn(8, |i| {
                if i == 5 {
                    panic!("constructor failure");
                }
                Counted(drops.clone())
            })
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_capacity_overflow_is_reported() {
        let err = OwnedBuffer::<u64>::try_with_default(usize::MAX).unwrap_err();
        assert!(matches!(
            err.kind(),
            crate::ErrorKind::CapacityOverflow { requested } if *requested == usize::MAX
        ));
    }

    #[test]
    fn test_zero_sized_elements() {
        let buf = OwnedBuffer::<()>::with_default(1000);
        assert_eq!(buf.capacity(), 1000);
        assert_eq!(buf.as_slice().len(), 1000);
    }

    #[test]
    fn test_exact_iter() {
        let buf = OwnedBuffer::from_exact_iter(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf[1], "b");
    }
}
