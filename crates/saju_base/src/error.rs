//! Error types for chart primitives.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating chart primitives.
///
/// Lookups over typed stems and branches are total; these errors only arise
/// at the string/index boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Identifier outside the closed stem/branch/stem-branch domains.
    InvalidReference(String),
    /// Malformed birth input or an invariant-breaking external sequence.
    InvalidInput(String),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference(msg) => write!(f, "invalid reference: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for SajuError {}
