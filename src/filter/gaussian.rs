//! Gaussian convolution smoothing.

use crate::filter::Smoother;
use crate::util::{PeakError, PeakResult};

/// Normalized Gaussian kernel of radius `max(ceil(3 sigma), 1)` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f64,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Builds the kernel for a finite, positive `sigma` (in samples).
    pub fn new(sigma: f64) -> PeakResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PeakError::InvalidParameter {
                name: "sigma",
                reason: "must be finite and positive",
            });
        }
        let radius = ((3.0 * sigma).ceil() as usize).max(1);
        let radius_i = radius as i64;
        let mut weights: Vec<f64> = (-radius_i..=radius_i)
            .map(|k| {
                let x = k as f64;
                (-0.5 * x * x / (sigma * sigma)).exp()
            })
            .collect();
        let sum: f64 = weights.iter().sum();
        for w in weights.iter_mut() {
            *w /= sum;
        }
        Ok(Self { sigma, weights })
    }

    /// Standard deviation in samples.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Kernel radius in samples.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// Normalized weights, ordered from offset `-radius` to `+radius`.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Convolves `values` with the kernel.
    ///
    /// Near the edges the kernel is truncated and renormalized by the weight
    /// that falls inside the data.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let radius = self.radius();
        (0..n)
            .map(|i| {
                let lo = i.saturating_sub(radius);
                let hi = (i + radius).min(n.saturating_sub(1));
                let mut acc = 0.0;
                let mut weight = 0.0;
                for (j, value) in values.iter().enumerate().take(hi + 1).skip(lo) {
                    let w = self.weights[j + radius - i];
                    acc += w * value;
                    weight += w;
                }
                acc / weight
            })
            .collect()
    }
}

impl Smoother for GaussianKernel {
    fn smooth(&self, values: &[f64]) -> PeakResult<Vec<f64>> {
        Ok(self.apply(values))
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianKernel;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let kernel = GaussianKernel::new(1.5).unwrap();
        assert_eq!(kernel.radius(), 5);
        let w = kernel.weights();
        let sum: f64 = w.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        for k in 0..w.len() {
            assert!((w[k] - w[w.len() - 1 - k]).abs() < 1e-15);
        }
    }

    #[test]
    fn constant_signal_is_preserved_at_edges() {
        let kernel = GaussianKernel::new(2.0).unwrap();
        let smoothed = kernel.apply(&[3.0; 10]);
        assert!(smoothed.iter().all(|v| (v - 3.0).abs() < 1e-12));
    }

    #[test]
    fn impulse_spreads_into_kernel_shape() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let mut impulse = vec![0.0; 21];
        impulse[10] = 1.0;
        let smoothed = kernel.apply(&impulse);
        let w = kernel.weights();
        for (k, weight) in w.iter().enumerate() {
            assert!((smoothed[10 - kernel.radius() + k] - weight).abs() < 1e-15);
        }
    }

    #[test]
    fn rejects_bad_sigma() {
        assert!(GaussianKernel::new(0.0).is_err());
        assert!(GaussianKernel::new(f64::NAN).is_err());
    }
}
