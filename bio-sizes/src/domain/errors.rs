//! Structured error types for bio-sizes
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

use crate::parser::MIN_FIELDS;

/// A trace line that matches neither the header nor the data row shape.
///
/// Both variants are fatal: a malformed line means the producer is not the
/// biosnoop format we understand, and skipping it would silently skew the
/// histogram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "input did not look like biosnoop output: line too short \
         ({fields} fields, need at least {min})\n  line: {line}",
        min = MIN_FIELDS
    )]
    TooShort { fields: usize, line: String },

    #[error("input did not look like biosnoop output: R/W column not found\n  line: {line}")]
    DirectionColumnNotFound { line: String },
}

impl ParseError {
    /// The offending raw line, without its trailing newline
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            ParseError::TooShort { line, .. } | ParseError::DirectionColumnNotFound { line } => {
                line
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems with how the tool was invoked
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("--{flag} must be a positive number of seconds, got {value}")]
    InvalidDuration { flag: &'static str, value: f64 },

    #[error("--width must be at least 1 column")]
    ZeroWidth,

    #[error(
        "stdin is a terminal; bio-sizes reads biosnoop output from a pipe.\n\n\
         Usage:\n  \
         sudo biosnoop | bio-sizes\n  \
         sudo python3 -u biosnoop.py | bio-sizes --window 30"
    )]
    InteractiveInput,
}
