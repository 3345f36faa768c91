#![forbid(unsafe_code)]
//! enumerable-operators: eager query operators over an owned `Sequence<T>`
//! (filter/map/aggregate/sort/group/join).
//!
//! Design intent:
//! - Every operator takes `&self` and materializes a fresh `Sequence`; the
//!   receiver's backing buffer is never touched after construction.
//! - Only sort operators carry a comparer chain forward. Everything else
//!   returns an unordered sequence.
//! - Recoverable failures (`first`/`last`/`min`/`max`) return
//!   `enumerable_core::Result`. Calling `then_by*` on an unsorted sequence is a
//!   programming error and panics.

pub mod sequence;
pub mod trace;

pub mod aggregate;
pub mod filter;
pub mod group;
pub mod join;
pub mod map;
pub mod sort;

#[cfg(feature = "serde")]
mod serde_impl;

pub use enumerable_core::{Error, Lookup, Result, SequenceConfig};
pub use sequence::Sequence;
pub use sort::chain::{build_comparer, Comparer, ComparerChain};
