//! Growth policy of [`SimpleVector`](crate::SimpleVector).
//!
//! All capacity arithmetic is checked: an overflowing target is reported as
//! `None` and surfaced by the caller as a capacity overflow.

/// Factor by which a full buffer grows.
pub const GROWTH_FACTOR: usize = 2;

/// Smallest capacity a zero-capacity vector grows to when it needs room.
pub const MIN_NON_ZERO_CAPACITY: usize = 1;

/// Capacity after a doubling step, or `None` on overflow.
#[inline]
pub fn doubled(capacity: usize) -> Option<usize> {
    capacity.checked_mul(GROWTH_FACTOR)
}

/// Target capacity for an append into a full buffer: `max(1, 2 * capacity)`.
#[inline]
pub fn push_capacity(capacity: usize) -> Option<usize> {
    doubled(capacity).map(|c| c.max(MIN_NON_ZERO_CAPACITY))
}

/// Target capacity for an insertion into a full buffer holding `len`
/// elements: `max(len + 1, 2 * capacity)`.
#[inline]
pub fn insert_capacity(len: usize, capacity: usize) -> Option<usize> {
    let required = len.checked_add(1)?;
    doubled(capacity).map(|c| c.max(required))
}

/// Target capacity when resizing past the current capacity:
/// `max(new_size, 2 * capacity)`.
#[inline]
pub fn resize_capacity(new_size: usize, capacity: usize) -> Option<usize> {
    doubled(capacity).map(|c| c.max(new_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_capacity_escapes_zero() {
        assert_eq!(push_capacity(0), Some(1));
        assert_eq!(push_capacity(1), Some(2));
        assert_eq!(push_capacity(5), Some(10));
    }

    #[test]
    fn test_insert_capacity() {
        assert_eq!(insert_capacity(0, 0), Some(1));
        assert_eq!(insert_capacity(3, 3), Some(6));
        assert_eq!(insert_capacity(usize::MAX, 1), None);
    }

    #[test]
    fn test_resize_capacity() {
        assert_eq!(resize_capacity(5, 2), Some(5));
        assert_eq!(resize_capacity(5, 4), Some(8));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(push_capacity(usize::MAX / 2 + 1), None);
        assert_eq!(resize_capacity(10, usize::MAX), None);
    }
}
