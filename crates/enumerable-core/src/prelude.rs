//! Convenient re-exports for downstream crates.

pub use crate::config::SequenceConfig;
pub use crate::error::{Error, Lookup, Result};
pub use crate::numeric::{partial_max, partial_min};
