//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls.

use thiserror::Error;

/// Errors raised while constructing core values from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid direction code {0:?}: expected 0/enter or 1/exit")]
    InvalidDirection(String),

    #[error("{what} length {got} does not match person count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("person count {0} exceeds the PersonId range")]
    TooManyPeople(usize),

    #[error("scenario error: {0}")]
    Scenario(String),
}

/// Shorthand result type for `ts-core`.
pub type CoreResult<T> = Result<T, CoreError>;
