//! Library configuration that callers can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// `where_` pre-reserves `len / filter_reserve_divisor` output slots.
    pub filter_reserve_divisor: usize,

    /// Emit a trace event per operator (needs the operators' `tracing` feature).
    pub trace_operators: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            filter_reserve_divisor: 2,
            trace_operators: false,
        }
    }
}

static GLOBAL: Lazy<SequenceConfig> = Lazy::new(|| {
    let cfg = SequenceConfig::from_env();
    match cfg.validate() {
        Ok(()) => cfg,
        Err(_) => SequenceConfig::default(),
    }
});

impl SequenceConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ENUMERABLE_FILTER_RESERVE_DIVISOR`: reserve divisor for `where_`
    /// - `ENUMERABLE_TRACE_OPERATORS`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ENUMERABLE_FILTER_RESERVE_DIVISOR") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.filter_reserve_divisor = v;
            }
        }

        if let Ok(s) = std::env::var("ENUMERABLE_TRACE_OPERATORS") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.trace_operators = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.filter_reserve_divisor == 0 {
            return Err(Error::Config(
                "filter_reserve_divisor must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Process-wide config, read from the environment on first use.
    ///
    /// An invalid environment falls back to `SequenceConfig::default()`.
    pub fn global() -> &'static SequenceConfig {
        &GLOBAL
    }

    /// Output capacity to reserve when filtering `len` elements.
    pub fn filter_reserve(&self, len: usize) -> usize {
        len / self.filter_reserve_divisor.max(1)
    }
}
