//! Pointwise curvature estimation by local quadratic regression.

use crate::fit::{select_window_around_pivot, QuadraticFit};
use crate::region::IndexRange;
use crate::util::parallel::map_indexed;
use crate::util::{PeakError, PeakResult};

/// A curvature window whose spread is below this fraction of its magnitude is
/// numerically constant.
const FLAT_CURVATURE_TOLERANCE: f64 = 1e-9;

/// Returns `true` when `window` is constant up to rounding relative to its
/// largest magnitude. Windows without finite samples are never flat.
pub(crate) fn is_flat(window: &[f64]) -> bool {
    let (lo, hi) = window
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    hi >= lo && hi - lo <= FLAT_CURVATURE_TOLERANCE * lo.abs().max(hi.abs())
}

fn fit_around(
    positions: &[f64],
    values: &[f64],
    domain: IndexRange,
    pivot: usize,
    half_width: usize,
) -> PeakResult<Option<QuadraticFit>> {
    match select_window_around_pivot(domain, pivot, half_width) {
        Some(window) => {
            QuadraticFit::fit(positions, values, window.start_inclusive(), window.length())
        }
        None => Ok(None),
    }
}

fn check_lengths(positions: &[f64], values: &[f64]) -> PeakResult<()> {
    if positions.len() != values.len() {
        return Err(PeakError::LengthMismatch {
            positions: positions.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// Estimates the second derivative of `values` at every sample.
///
/// Each estimate is `2 * a2` of a quadratic fitted over a window of
/// `2 * half_width + 1` samples around the index, clamped into the data.
/// Samples where no fit is available get `0.0`.
pub fn second_derivative(
    positions: &[f64],
    values: &[f64],
    half_width: usize,
    parallel: bool,
) -> PeakResult<Vec<f64>> {
    check_lengths(positions, values)?;
    let Ok(domain) = IndexRange::covering(positions) else {
        return Ok(Vec::new());
    };
    map_indexed(positions.len(), parallel, |i| {
        fit_around(positions, values, domain, i, half_width)
            .map(|fit| fit.map_or(0.0, |fit| fit.curvature()))
    })
    .into_iter()
    .collect()
}

/// Estimates the slope of a second-derivative curve at every sample.
///
/// Uses the same windowing as [`second_derivative`], fitting against
/// `second_derivative` instead of the raw values, and evaluates the fitted
/// slope at the sample position. Windows where the curvature is numerically
/// constant get exactly `0.0`; samples without a fit get `NaN`.
pub fn second_derivative_slope(
    positions: &[f64],
    second_derivative: &[f64],
    half_width: usize,
    parallel: bool,
) -> PeakResult<Vec<f64>> {
    check_lengths(positions, second_derivative)?;
    let Ok(domain) = IndexRange::covering(positions) else {
        return Ok(Vec::new());
    };
    map_indexed(positions.len(), parallel, |i| {
        let Some(window) = select_window_around_pivot(domain, i, half_width) else {
            return Ok(f64::NAN);
        };
        let (start, length) = (window.start_inclusive(), window.length());
        if is_flat(&second_derivative[start..start + length]) {
            return Ok(0.0);
        }
        QuadraticFit::fit(positions, second_derivative, start, length)
            .map(|fit| fit.map_or(f64::NAN, |fit| fit.slope_at(positions[i])))
    })
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_flat, second_derivative, second_derivative_slope};

    #[test]
    fn parabola_has_constant_curvature() {
        let xs: Vec<f64> = (0..11).map(|i| i as f64 / 10.0).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x * x - x + 1.0).collect();
        let d2 = second_derivative(&xs, &ys, 2, false).unwrap();
        assert!(d2.iter().all(|v| (v - 6.0).abs() < 1e-8));
    }

    #[test]
    fn too_short_data_yields_zero_curvature() {
        let xs = [0.0, 0.5, 1.0];
        let d2 = second_derivative(&xs, &[1.0, 2.0, 0.0], 2, false).unwrap();
        assert_eq!(d2, vec![0.0; 3]);
        let slope = second_derivative_slope(&xs, &d2, 2, false).unwrap();
        assert!(slope.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn slope_of_linear_curvature_is_its_gradient() {
        let xs: Vec<f64> = (0..9).map(|i| i as f64 * 0.25).collect();
        let d2: Vec<f64> = xs.iter().map(|x| 2.0 - 4.0 * x).collect();
        let slope = second_derivative_slope(&xs, &d2, 1, false).unwrap();
        assert!(slope.iter().all(|v| (v + 4.0).abs() < 1e-9));
    }

    #[test]
    fn rounding_level_curvature_noise_has_zero_slope() {
        let xs: Vec<f64> = (0..9).map(|i| i as f64 / 8.0).collect();
        let d2: Vec<f64> = (0..9)
            .map(|i| -72.0 + if i % 2 == 0 { 1e-13 } else { -2e-13 })
            .collect();
        let slope = second_derivative_slope(&xs, &d2, 1, false).unwrap();
        assert_eq!(slope, vec![0.0; 9]);
    }

    #[test]
    fn flatness_is_relative_to_magnitude() {
        assert!(is_flat(&[0.0, 0.0, 0.0]));
        assert!(is_flat(&[-72.0, -72.0 + 1e-12, -72.0]));
        assert!(!is_flat(&[-72.0, -71.9, -72.0]));
        assert!(!is_flat(&[1e-9, 2e-9, 1e-9]));
        assert!(!is_flat(&[f64::NAN, f64::NAN]));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(second_derivative(&[0.0, 1.0], &[0.0], 1, false).is_err());
    }
}
