//! How an incoming element enters the vector.
//!
//! `push_back`/`insert` and their `_cloned` counterparts share one growth
//! and shifting path that is generic over a [`Transfer`] mode: [`Take`]
//! moves the caller's value in, [`Cloned`] clones it from a borrow.

/// Produces the element to store.
pub(crate) trait Transfer<T> {
    fn into_element(self) -> T;
}

/// Takes ownership of the value.
pub(crate) struct Take<T>(pub T);

/// Clones the value from a borrow.
pub(crate) struct Cloned<'a, T>(pub &'a T);

impl<T> Transfer<T> for Take<T> {
    #[inline]
    fn into_element(self) -> T {
        self.0
    }
}

impl<T: Clone> Transfer<T> for Cloned<'_, T> {
    #[inline]
    fn into_element(self) -> T {
        self.0.clone()
    }
}
