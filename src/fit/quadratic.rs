//! Closed-form second-degree least-squares fit.
//!
//! The normal equations of `y = a0 + a1 x + a2 x^2` are solved with Cramer's
//! rule over seven power sums, without forming or inverting a matrix. Sums are
//! accumulated relative to the window's middle sample, in both position and
//! value, and the coefficients are shifted back afterwards. The determinant
//! does not depend on either shift, and a constant window accumulates
//! value sums of exactly zero.

use crate::util::math::{is_close_to_zero, pow2, pow3};
use crate::util::{PeakError, PeakResult};

const MIN_POINTS: usize = 3;
const DET_ZERO_PRECISION: f64 = 1e-35;
/// Centered coefficients whose contribution over the window is below this
/// fraction of the window's value spread are flushed to zero.
const COEFFICIENT_NOISE_FLOOR: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default)]
struct PowerSums {
    x: f64,
    y: f64,
    xy: f64,
    x2: f64,
    x2y: f64,
    x3: f64,
    x4: f64,
    count: usize,
}

impl PowerSums {
    fn accumulate(xs: &[f64], ys: &[f64], origin: f64, reference: f64) -> Self {
        let mut sums = PowerSums {
            count: xs.len(),
            ..PowerSums::default()
        };
        for (&x, &v) in xs.iter().zip(ys.iter()) {
            let t = x - origin;
            let y = v - reference;
            let t2 = t * t;
            sums.x += t;
            sums.y += y;
            sums.xy += y * t;
            sums.x2 += t2;
            sums.x2y += y * t2;
            sums.x3 += t2 * t;
            sums.x4 += t2 * t2;
        }
        sums
    }

    fn determinant(&self) -> f64 {
        let n = self.count as f64;
        pow3(self.x2) + self.x4 * pow2(self.x) - 2.0 * self.x2 * self.x * self.x3
            + n * (pow2(self.x3) - self.x4 * self.x2)
    }

    fn coefficients(&self, det: f64) -> [f64; 3] {
        let n = self.count as f64;
        let s = self;
        let a0 = (pow2(s.x3) * s.y + pow2(s.x2) * s.x2y - s.x3 * (s.x * s.x2y + s.x2 * s.xy)
            + s.x4 * (-s.x2 * s.y + s.x * s.xy))
            / det;
        let a1 = (n * s.x3 * s.x2y - s.x2 * (s.x3 * s.y + s.x * s.x2y) + pow2(s.x2) * s.xy
            + s.x4 * (s.x * s.y - n * s.xy))
            / det;
        let a2 = (pow2(s.x2) * s.y - s.x * s.x3 * s.y + pow2(s.x) * s.x2y + n * s.x3 * s.xy
            - s.x2 * (n * s.x2y + s.x * s.xy))
            / det;
        [a0, a1, a2]
    }
}

/// Coefficients of a quadratic fitted to one contiguous window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticFit {
    a0: f64,
    a1: f64,
    a2: f64,
    det: f64,
    point_count: usize,
}

impl QuadraticFit {
    /// Fits `values[start..start + length]` against the matching positions.
    ///
    /// Returns `Err` for mismatched arrays, a window past the end of the data
    /// or fewer than three points. Returns `Ok(None)` when the window is
    /// numerically singular (e.g. fewer than three distinct positions); that
    /// outcome is expected and callers fall back on it.
    pub fn fit(
        positions: &[f64],
        values: &[f64],
        start: usize,
        length: usize,
    ) -> PeakResult<Option<Self>> {
        if positions.len() != values.len() {
            return Err(PeakError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }
        let end = start
            .checked_add(length)
            .filter(|&end| end <= positions.len())
            .ok_or(PeakError::WindowOutOfBounds {
                start,
                length,
                len: positions.len(),
            })?;
        if length < MIN_POINTS {
            return Err(PeakError::TooFewPoints {
                needed: MIN_POINTS,
                got: length,
            });
        }

        let xs = &positions[start..end];
        let ys = &values[start..end];
        let origin = xs[length / 2];
        let reference = ys[length / 2];
        let sums = PowerSums::accumulate(xs, ys, origin, reference);
        let det = sums.determinant();
        if is_close_to_zero(det, DET_ZERO_PRECISION) {
            return Ok(None);
        }

        let [b0, mut b1, mut b2] = sums.coefficients(det);
        let radius = xs.iter().map(|&x| (x - origin).abs()).fold(0.0, f64::max);
        let floor = COEFFICIENT_NOISE_FLOOR * value_spread(ys);
        if (b2 * radius * radius).abs() <= floor {
            b2 = 0.0;
        }
        if (b1 * radius).abs() <= floor {
            b1 = 0.0;
        }

        Ok(Some(Self {
            a0: b0 + reference - b1 * origin + b2 * origin * origin,
            a1: b1 - 2.0 * b2 * origin,
            a2: b2,
            det,
            point_count: length,
        }))
    }

    /// Constant coefficient.
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Linear coefficient.
    pub fn a1(&self) -> f64 {
        self.a1
    }

    /// Quadratic coefficient.
    pub fn a2(&self) -> f64 {
        self.a2
    }

    /// Determinant of the normal equations, in Cramer's-rule sign convention.
    pub fn determinant(&self) -> f64 {
        self.det
    }

    /// Number of samples the fit was built from.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Evaluates the fitted polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a0 + x * (self.a1 + x * self.a2)
    }

    /// First derivative of the fitted polynomial at `x`.
    pub fn slope_at(&self, x: f64) -> f64 {
        2.0 * self.a2 * x + self.a1
    }

    /// Second derivative of the fitted polynomial (constant).
    pub fn curvature(&self) -> f64 {
        2.0 * self.a2
    }

    /// Position of the extremum `-a1 / (2 a2)`, if the fit is not linear.
    pub fn vertex(&self) -> Option<f64> {
        if self.a2 == 0.0 {
            return None;
        }
        let x = -self.a1 / (2.0 * self.a2);
        x.is_finite().then_some(x)
    }
}

fn value_spread(ys: &[f64]) -> f64 {
    let (lo, hi) = ys
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });
    hi - lo
}
