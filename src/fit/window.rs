//! Window sizing and placement.

use crate::region::IndexRange;
use crate::util::{PeakError, PeakResult};

/// Converts a half-width into the odd full window length `2 * half_width + 1`.
pub fn full_width(half_width: usize) -> PeakResult<usize> {
    half_width
        .checked_mul(2)
        .and_then(|w| w.checked_add(1))
        .ok_or(PeakError::WidthOverflow { half_width })
}

/// Places a window of `full_width(half_width)` samples around `pivot`.
///
/// The window is centered on the pivot and then shifted so that it lies
/// entirely inside `region`; its size never shrinks. Returns `None` when
/// `half_width < 1` or the region is shorter than the window.
pub fn select_window_around_pivot(
    region: IndexRange,
    pivot: usize,
    half_width: usize,
) -> Option<IndexRange> {
    if half_width < 1 {
        return None;
    }
    let width = full_width(half_width).ok()?;
    if region.length() < width {
        return None;
    }
    let last_start = region.end_inclusive() - (width - 1);
    let start = pivot
        .saturating_sub(half_width)
        .max(region.start_inclusive())
        .min(last_start);
    IndexRange::from_start_len(start, width).ok()
}
