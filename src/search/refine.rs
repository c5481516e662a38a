//! Sub-sample refinement of a single candidate region.
//!
//! Each region ends in exactly one of three states: the vertex of a quadratic
//! fitted to the curvature around its most concave sample, the zero crossing
//! of the curvature slope, or the region midpoint.

use crate::fit::{select_window_around_pivot, QuadraticFit};
use crate::refine::find_zero_crossing;
use crate::region::IndexRange;
use crate::search::derivative::is_flat;
use crate::search::{Peak, RefinementMethod};
use crate::trace::region_event;
use crate::util::math::within;
use crate::util::{PeakError, PeakResult};

/// Refines the peak position inside one concave `region`.
///
/// `second_derivative` and `slope` are the outputs of the two curvature passes
/// over `positions`. The returned position is in the same domain as
/// `positions`.
///
/// # Errors
/// Mismatched array lengths, a region shorter than three samples, or a region
/// past the end of the data.
pub fn refine_region(
    positions: &[f64],
    second_derivative: &[f64],
    slope: &[f64],
    region: IndexRange,
    half_width: usize,
) -> PeakResult<Peak> {
    for other in [second_derivative.len(), slope.len()] {
        if other != positions.len() {
            return Err(PeakError::LengthMismatch {
                positions: positions.len(),
                values: other,
            });
        }
    }
    if region.end_inclusive() >= positions.len() {
        return Err(PeakError::WindowOutOfBounds {
            start: region.start_inclusive(),
            length: region.length(),
            len: positions.len(),
        });
    }
    if region.length() < 3 {
        return Err(PeakError::TooFewPoints {
            needed: 3,
            got: region.length(),
        });
    }

    let lo = positions[region.start_inclusive()];
    let hi = positions[region.end_inclusive()];
    let vertex = curvature_vertex(positions, second_derivative, region, half_width)?;
    let (position, method) = match vertex {
        Some(vertex) if within(vertex, lo, hi) => (vertex, RefinementMethod::QuadraticVertex),
        _ => match find_zero_crossing(positions, slope, region, half_width)? {
            Some(root) => (root, RefinementMethod::ZeroCrossing),
            None => (0.5 * (lo + hi), RefinementMethod::Midpoint),
        },
    };
    region_event!(
        "region_refined",
        start = region.start_inclusive(),
        end = region.end_inclusive(),
        position = position,
        method = method.as_str(),
    );
    Ok(Peak {
        position,
        region,
        method,
    })
}

fn curvature_vertex(
    positions: &[f64],
    second_derivative: &[f64],
    region: IndexRange,
    half_width: usize,
) -> PeakResult<Option<f64>> {
    let pivot = region.indices().fold(region.start_inclusive(), |best, i| {
        if second_derivative[i] < second_derivative[best] {
            i
        } else {
            best
        }
    });
    let approx_half_width = ((region.length() - 1) / 2).min(half_width);
    let Some(window) = select_window_around_pivot(region, pivot, approx_half_width) else {
        return Ok(None);
    };
    let span = &second_derivative[window.start_inclusive()..=window.end_inclusive()];
    if is_flat(span) {
        return Ok(None);
    }
    let fit = QuadraticFit::fit(
        positions,
        second_derivative,
        window.start_inclusive(),
        window.length(),
    )?;
    Ok(fit.and_then(|fit| fit.vertex()))
}
