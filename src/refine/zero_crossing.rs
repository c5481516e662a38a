//! Zero-crossing search over a sampled curve.
//!
//! The first sign change inside a region is bracketed by adjacent samples and
//! then resolved with a local quadratic fit, falling back to the secant
//! through the two bracketing samples.

use crate::fit::{select_window_around_pivot, QuadraticFit};
use crate::region::IndexRange;
use crate::util::math::{pow2, within};
use crate::util::{PeakError, PeakResult};

/// Finds the first zero crossing of `values` inside `region`.
///
/// An exact zero sample counts as a crossing. Returns `Ok(None)` when the
/// region has no sign change or no root inside
/// `[positions[region.start], positions[region.end]]` could be resolved.
///
/// # Errors
/// Mismatched arrays, a region shorter than three samples, or a region that
/// ends past the data.
pub fn find_zero_crossing(
    positions: &[f64],
    values: &[f64],
    region: IndexRange,
    half_width: usize,
) -> PeakResult<Option<f64>> {
    if positions.len() != values.len() {
        return Err(PeakError::LengthMismatch {
            positions: positions.len(),
            values: values.len(),
        });
    }
    if region.length() < 3 {
        return Err(PeakError::TooFewPoints {
            needed: 3,
            got: region.length(),
        });
    }
    if region.end_inclusive() >= positions.len() {
        return Err(PeakError::WindowOutOfBounds {
            start: region.start_inclusive(),
            length: region.length(),
            len: positions.len(),
        });
    }

    let bracket = (region.start_inclusive()..region.end_inclusive())
        .find(|&i| values[i] * values[i + 1] <= 0.0);
    let Some(left) = bracket else {
        return Ok(None);
    };

    if let Some(root) = quadratic_root(positions, values, left, region, half_width)? {
        return Ok(Some(root));
    }
    Ok(secant_root(positions, values, left, region))
}

fn quadratic_root(
    positions: &[f64],
    values: &[f64],
    left: usize,
    region: IndexRange,
    half_width: usize,
) -> PeakResult<Option<f64>> {
    let Some(window) = select_window_around_pivot(region, left, half_width) else {
        return Ok(None);
    };
    let Some(fit) =
        QuadraticFit::fit(positions, values, window.start_inclusive(), window.length())?
    else {
        return Ok(None);
    };

    let lo = positions[region.start_inclusive()];
    let hi = positions[region.end_inclusive()];
    let (a0, a1, a2) = (fit.a0(), fit.a1(), fit.a2());

    if a2 == 0.0 {
        if a1 == 0.0 {
            return Ok(None);
        }
        let root = -a0 / a1;
        return Ok(within(root, lo, hi).then_some(root));
    }

    let discriminant = pow2(a1) - 4.0 * a0 * a2;
    if discriminant < 0.0 {
        return Ok(None);
    }
    let sqrt_disc = discriminant.sqrt();
    let roots = [
        (-a1 - sqrt_disc) / (2.0 * a2),
        (-a1 + sqrt_disc) / (2.0 * a2),
    ];
    Ok(roots.into_iter().find(|&root| within(root, lo, hi)))
}

fn secant_root(positions: &[f64], values: &[f64], left: usize, region: IndexRange) -> Option<f64> {
    let right = left + 1;
    let x = (values[right] * positions[left] - values[left] * positions[right])
        / (values[right] - values[left]);
    within(
        x,
        positions[region.start_inclusive()],
        positions[region.end_inclusive()],
    )
    .then_some(x)
}
