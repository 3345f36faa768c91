use std::fmt;

use thiserror::Error;

/// Canonical result for sequence queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a `first`/`last` lookup came back empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// No predicate was supplied and the sequence has no elements.
    EmptySequence,
    /// A predicate was supplied and no element satisfied it.
    NoMatch,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::EmptySequence => f.write_str("sequence contains no elements"),
            Lookup::NoMatch => f.write_str("no element satisfies the predicate"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{op}: {reason}")]
    NotFound { op: &'static str, reason: Lookup },

    #[error("{op}: empty sequence")]
    EmptySequence { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for the recoverable lookup failures raised by `first`/`last`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operator() {
        let e = Error::NotFound {
            op: "first",
            reason: Lookup::EmptySequence,
        };
        assert_eq!(e.to_string(), "first: sequence contains no elements");
        assert!(e.is_not_found());

        let e = Error::EmptySequence { op: "max" };
        assert_eq!(e.to_string(), "max: empty sequence");
        assert!(!e.is_not_found());
    }
}
