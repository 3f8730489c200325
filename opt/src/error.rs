//! Error types for value extraction.
//!
//! Codec failures are not listed here: the JSON and YAML entry points
//! return the codec crate's own error type untouched.

use thiserror::Error;

/// Errors raised by [`Opt`](crate::Opt) itself.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptError {
    /// [`Opt::take`](crate::Opt::take) was called on a `None` value.
    #[error("none value taken")]
    NoneValueTaken,
}
