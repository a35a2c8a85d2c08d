//! A growable, contiguous, random-access sequence built on an explicitly
//! managed heap buffer.
//!
//! # Components
//!
//! - [`OwnedBuffer`]: one exclusively owned allocation of a fixed number of
//!   initialized slots, with O(1) `swap`/`take` and no resizing logic.
//! - [`CapacityRequest`]: selects the reserve-only constructor
//!   ([`SimpleVector::reserved`]), produced by [`reserve`].
//! - [`SimpleVector`]: a length over an `OwnedBuffer`, with the growth policy
//!   from [`config`], positional insert/erase, resize and ordering.
//!
//! # Errors
//!
//! [`SimpleVector::at`] reports `OutOfRange`. The `try_*` forms of the
//! growing operations report `CapacityOverflow` and `AllocationFailure`
//! and leave the vector unchanged; their infallible twins escalate those
//! the way `Vec` does. Violated preconditions (`v[i]` past the end,
//! `pop_back` on an empty vector, out-of-range `insert`/`erase`) panic.
//!
//! The container is single-threaded: it is `Send`/`Sync` exactly when `T`
//! is, and shared access follows the usual borrowing rules.

pub mod capacity;
pub mod config;
pub mod error;
mod macros;
pub mod owned_buffer;
pub mod result;
mod transfer;
pub mod vector;


pub use capacity::{CapacityRequest, reserve};
pub use error::{Error, ErrorKind};
pub use owned_buffer::OwnedBuffer;
pub use result::Result;
pub use vector::SimpleVector;
