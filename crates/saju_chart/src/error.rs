//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;

/// Failure reported by a calendar provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date does not exist in the requested calendar.
    InvalidDate(String),
    /// The year lies outside the provider's supported range.
    OutOfRange { year: i32 },
    /// The provider could not answer.
    Unavailable(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::OutOfRange { year } => write!(f, "year {year} out of supported range"),
            Self::Unavailable(msg) => write!(f, "calendar unavailable: {msg}"),
        }
    }
}

impl Error for CalendarError {}

/// Errors from chart assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from chart primitives.
    Saju(SajuError),
    /// Error from the calendar provider.
    Calendar(CalendarError),
}

impl ChartError {
    /// True for malformed birth input and every calendar failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Calendar(_) | Self::Saju(SajuError::InvalidInput(_))
        )
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saju(e) => write!(f, "chart error: {e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Saju(e) => Some(e),
            Self::Calendar(e) => Some(e),
        }
    }
}

impl From<SajuError> for ChartError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
