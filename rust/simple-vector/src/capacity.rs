//! Capacity reservation requests.

/// A request to reserve room for a number of elements without populating them.
///
/// Passing a `CapacityRequest` to [`SimpleVector::reserved`](crate::SimpleVector::reserved)
/// (or converting it with `From`) yields a vector of size 0 and exactly the
/// requested capacity, unlike [`SimpleVector::with_size`](crate::SimpleVector::with_size)
/// which also populates that many default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityRequest(usize);

impl CapacityRequest {
    pub const fn new(capacity: usize) -> CapacityRequest {
        CapacityRequest(capacity)
    }

    /// Number of element slots requested.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.0
    }
}

/// Shorthand for [`CapacityRequest::new`].
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let v = SimpleVector::<u32>::reserved(reserve(10));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 10);
/// ```
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}

impl From<usize> for CapacityRequest {
    fn from(capacity: usize) -> Self {
        CapacityRequest(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_helper() {
        assert_eq!(reserve(42).capacity(), 42);
        assert_eq!(reserve(7), CapacityRequest::from(7));
    }
}
