#![forbid(unsafe_code)]
//! enumerable-core: error taxonomy, configuration, and numeric helpers shared
//! by the sequence operators.
//!
//! Keep this crate free of operator logic. `enumerable-operators` depends on it;
//! nothing here depends back on the operators.

pub mod config;
pub mod error;
pub mod numeric;
pub mod prelude;

pub use config::SequenceConfig;
pub use error::{Error, Lookup, Result};
