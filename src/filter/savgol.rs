//! Savitzky-Golay least-squares smoothing.
//!
//! Convolution weights come from fitting a polynomial of `poly_order` to a
//! centered window of integer offsets; the smoothed value is the fitted
//! constant term. Samples are assumed uniformly spaced.

use crate::filter::Smoother;
use crate::util::{PeakError, PeakResult};

/// Precomputed Savitzky-Golay smoothing weights.
#[derive(Clone, Debug, PartialEq)]
pub struct SavitzkyGolay {
    window_size: usize,
    poly_order: usize,
    coefficients: Vec<f64>,
}

impl SavitzkyGolay {
    /// Builds the filter for an odd `window_size > poly_order`.
    pub fn new(window_size: usize, poly_order: usize) -> PeakResult<Self> {
        if window_size % 2 == 0 || window_size <= poly_order {
            return Err(PeakError::InvalidParameter {
                name: "window_size",
                reason: "must be odd and greater than poly_order",
            });
        }
        let coefficients = smoothing_coefficients(window_size / 2, poly_order)?;
        Ok(Self {
            window_size,
            poly_order,
            coefficients,
        })
    }

    /// Window length in samples.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Degree of the local polynomial.
    pub fn poly_order(&self) -> usize {
        self.poly_order
    }

    /// Convolution weights, ordered from offset `-h` to `+h`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Smooths `values`; the `window_size / 2` samples at each edge are
    /// copied unchanged.
    ///
    /// # Errors
    /// Fewer samples than the window length.
    pub fn apply(&self, values: &[f64]) -> PeakResult<Vec<f64>> {
        let n = values.len();
        if n < self.window_size {
            return Err(PeakError::TooFewPoints {
                needed: self.window_size,
                got: n,
            });
        }
        let half = self.window_size / 2;
        let mut out = values.to_vec();
        for (center, window) in values.windows(self.window_size).enumerate() {
            out[center + half] = window
                .iter()
                .zip(self.coefficients.iter())
                .map(|(v, c)| v * c)
                .sum();
        }
        Ok(out)
    }
}

impl Smoother for SavitzkyGolay {
    fn smooth(&self, values: &[f64]) -> PeakResult<Vec<f64>> {
        self.apply(values)
    }
}

/// Solves `(A^T A) z = e0` for the Vandermonde matrix of offsets `-half..=half`
/// and expands `z` into per-offset weights.
fn smoothing_coefficients(half: usize, poly_order: usize) -> PeakResult<Vec<f64>> {
    let m = poly_order + 1;
    let half = half as i64;
    let offsets: Vec<f64> = (-half..=half).map(|i| i as f64).collect();

    let mut normal = vec![vec![0.0f64; m + 1]; m];
    for (row, line) in normal.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().take(m).enumerate() {
            *cell = offsets.iter().map(|x| x.powi((row + col) as i32)).sum();
        }
        line[m] = if row == 0 { 1.0 } else { 0.0 };
    }
    let z = solve_augmented(normal)?;

    Ok(offsets
        .iter()
        .map(|&x| {
            z.iter()
                .enumerate()
                .map(|(k, zk)| zk * x.powi(k as i32))
                .sum()
        })
        .collect())
}

/// Gauss-Jordan elimination with partial pivoting on an `m x (m + 1)`
/// augmented matrix.
fn solve_augmented(mut rows: Vec<Vec<f64>>) -> PeakResult<Vec<f64>> {
    let m = rows.len();
    for col in 0..m {
        let pivot = (col..m)
            .max_by(|&a, &b| rows[a][col].abs().total_cmp(&rows[b][col].abs()))
            .unwrap_or(col);
        if rows[pivot][col].abs() < 1e-12 {
            return Err(PeakError::InvalidParameter {
                name: "poly_order",
                reason: "normal equations are singular for this window",
            });
        }
        rows.swap(col, pivot);
        let lead = rows[col][col];
        for value in rows[col].iter_mut() {
            *value /= lead;
        }
        let pivot_row = rows[col].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            if factor == 0.0 {
                continue;
            }
            for (value, p) in row.iter_mut().zip(pivot_row.iter()) {
                *value -= factor * p;
            }
        }
    }
    Ok(rows.into_iter().map(|row| row[m]).collect())
}

#[cfg(test)]
mod tests {
    use super::SavitzkyGolay;
    use crate::PeakError;

    #[test]
    fn quadratic_window_five_matches_reference_weights() {
        let filter = SavitzkyGolay::new(5, 2).unwrap();
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|w| w / 35.0);
        for (got, want) in filter.coefficients().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let filter = SavitzkyGolay::new(11, 3).unwrap();
        let sum: f64 = filter.coefficients().iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn preserves_polynomials_up_to_order() {
        let filter = SavitzkyGolay::new(7, 2).unwrap();
        let ys: Vec<f64> = (0..20).map(|i| 0.5 * (i * i) as f64 - 3.0 * i as f64).collect();
        let smoothed = filter.apply(&ys).unwrap();
        for (a, b) in smoothed.iter().zip(ys.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(SavitzkyGolay::new(4, 2).is_err());
        assert!(SavitzkyGolay::new(3, 3).is_err());
        let filter = SavitzkyGolay::new(5, 2).unwrap();
        assert_eq!(
            filter.apply(&[1.0, 2.0]).unwrap_err(),
            PeakError::TooFewPoints { needed: 5, got: 2 }
        );
    }
}
