pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Unwraps the result of a growing operation, escalating allocation errors.
#[inline]
pub(crate) fn or_raise<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => e.raise(),
    }
}

#[inline]
pub fn verify_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        out_of_range(index, size)
    }
}

#[cold]
pub fn out_of_range(index: usize, size: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, size }.into())
}
