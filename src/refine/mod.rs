//! Sub-sample root and extremum refinement.

pub mod zero_crossing;

pub use zero_crossing::find_zero_crossing;
