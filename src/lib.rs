#![forbid(unsafe_code)]
//! enumerable: eager, chainable query operators over in-memory sequences.
//!
//! Facade over the workspace crates:
//! - `enumerable-core`: errors, configuration, numeric helpers.
//! - `enumerable-operators`: `Sequence<T>` and its operators.
//!
//! ```
//! use enumerable::{Error, Lookup, Sequence};
//!
//! let evens = Sequence::range(1, 5).filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! assert_eq!(evens.sum(|x| *x), 6);
//!
//! let empty: Sequence<i64> = Sequence::empty();
//! assert_eq!(
//!     empty.first(),
//!     Err(Error::NotFound { op: "first", reason: Lookup::EmptySequence })
//! );
//! assert_eq!(empty.first_or_default(-1), -1);
//! ```

pub use enumerable_core::prelude;
pub use enumerable_operators::{
    build_comparer, Comparer, ComparerChain, Error, Lookup, Result, Sequence, SequenceConfig,
};
