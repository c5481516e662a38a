//! Error types for peakloc.

use thiserror::Error;

/// Result alias for peakloc operations.
pub type PeakResult<T> = std::result::Result<T, PeakError>;

/// Errors raised for invalid arguments.
///
/// Numeric degeneracies (singular fits, missing sign changes) are not errors;
/// they surface as `Ok(None)` and are absorbed by the refinement fallbacks.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PeakError {
    /// Position and value arrays differ in length.
    #[error("positions and values must have equal length ({positions} != {values})")]
    LengthMismatch { positions: usize, values: usize },
    /// Not enough samples for the requested operation.
    #[error("at least {needed} points are required, got {got}")]
    TooFewPoints { needed: usize, got: usize },
    /// The half-width must be strictly positive.
    #[error("half-width must be positive, got {half_width}")]
    InvalidHalfWidth { half_width: usize },
    /// An index range with an empty or reversed extent.
    #[error("invalid index range: start {start}, end {end}")]
    InvalidRange { start: usize, end: usize },
    /// A window extends past the end of the data.
    #[error("window [{start}, {start} + {length}) exceeds data length {len}")]
    WindowOutOfBounds {
        start: usize,
        length: usize,
        len: usize,
    },
    /// A width computation overflowed `usize`.
    #[error("window width overflows for half-width {half_width}")]
    WidthOverflow { half_width: usize },
    /// A filter or search parameter is out of its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    /// Reading or writing a data file failed.
    #[error("i/o error: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for PeakError {
    fn from(err: std::io::Error) -> Self {
        PeakError::Io {
            reason: err.to_string(),
        }
    }
}
