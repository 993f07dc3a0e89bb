//! Errors for parsing the textual form of core enums.

use thiserror::Error;

/// A value could not be parsed into one of the core enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseError {
    /// What was being parsed (e.g. "language").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
