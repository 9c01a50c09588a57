//! Error types for the Chebyshev kernel.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Contract violations reported by kernel operations.
///
/// Degenerate but well-shaped input (a zero series, an empty root set, an
/// evaluation point sitting on a node) is handled in place and never shows
/// up here.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChebError {
    /// A sequence that must hold at least one element was empty.
    EmptyInput(&'static str),
    /// Two sequences that must be index-aligned have different lengths.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A [`ChebConfig`](crate::ChebConfig) field is out of range.
    InvalidConfig(&'static str),
    /// An argument is outside its documented domain.
    InvalidArgument(&'static str),
    /// An iterative solve hit its iteration limit.
    NoConvergence(&'static str),
}

impl Display for ChebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput(what) => write!(f, "empty input: {what}"),
            Self::LengthMismatch {
                what,
                expected,
                found,
            } => write!(f, "length mismatch for {what}: expected {expected}, found {found}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::NoConvergence(what) => write!(f, "no convergence: {what}"),
        }
    }
}

impl Error for ChebError {}
