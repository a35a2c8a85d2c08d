//! Test utilities for the simple-vector workspace.
//!
//! This crate provides:
//! - Instrumented element types that count constructions, clones and drops
//!   ([`tracked`]), refuse cloning, or panic on demand while being cloned
//! - Seeded random operation sequences for differential testing ([`ops`])
//!
//! # Usage
//!
//! This crate is only meant for tests and benchmarks of the workspace.

pub mod ops;
pub mod tracked;

pub use ops::{Op, OpGenerator};
pub use tracked::{CloneBomb, DropLedger, MoveOnly, Tracked};
