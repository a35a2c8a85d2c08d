use std::alloc::Layout;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, size: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, size }.into())
    }

    pub fn capacity_overflow(requested: usize) -> Error {
        Error(ErrorKind::CapacityOverflow { requested }.into())
    }

    pub fn allocation_failure(capacity: usize, layout: Layout) -> Error {
        Error(ErrorKind::AllocationFailure { capacity, layout }.into())
    }

    /// Returns `true` for the kinds produced by a failed or impossible allocation.
    pub fn is_allocation_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::CapacityOverflow { .. } | ErrorKind::AllocationFailure { .. }
        )
    }

    /// Escalates an allocation error the way the standard collections do:
    /// allocator failures go to [`std::alloc::handle_alloc_error`], everything
    /// else panics.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self.into_kind() {
            ErrorKind::AllocationFailure { layout, .. } => std::alloc::handle_alloc_error(layout),
            kind => panic!("{kind}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("capacity overflow: {requested} elements cannot be allocated")]
    CapacityOverflow { requested: usize },

    #[error(
        "failed to allocate {} bytes for {capacity} elements",
        layout.size())]
    AllocationFailure { capacity: usize, layout: Layout },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
