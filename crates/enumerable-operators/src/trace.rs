//! Operator tracing hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is on. Even then, events are
//! only emitted when `SequenceConfig::trace_operators` is set.

#[cfg(feature = "tracing")]
use enumerable_core::SequenceConfig;

#[cfg(feature = "tracing")]
pub fn emit_op(op: &'static str, input: usize, output: usize) {
    if SequenceConfig::global().trace_operators {
        tracing::trace!(op, input, output, "sequence operator");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_op(_op: &'static str, _input: usize, _output: usize) { /* no-op */
}

/// Abort on operator misuse. Never meant to be caught in normal control flow.
#[track_caller]
pub fn misuse(op: &'static str, requirement: &'static str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(op, requirement, "sequence operator misuse");
    panic!("{op} requires {requirement}")
}
