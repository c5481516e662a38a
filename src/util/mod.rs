//! Shared utility helpers.

pub mod error;
pub(crate) mod math;
pub(crate) mod parallel;

pub use error::{PeakError, PeakResult};
