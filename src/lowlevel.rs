//! Low-level building blocks for custom peak pipelines.
//!
//! These expose the individual passes of the search (curvature estimation,
//! segmentation, per-region refinement) and the fitting primitives. Most
//! users should prefer [`PeakSearch`](crate::PeakSearch) or
//! [`search_peaks`](crate::search_peaks).

pub use crate::fit::{full_width, select_window_around_pivot, QuadraticFit};
pub use crate::refine::find_zero_crossing;
pub use crate::search::derivative::{second_derivative, second_derivative_slope};
pub use crate::search::refine::refine_region;
pub use crate::search::segment::{concave_regions, MIN_REGION_LENGTH};
