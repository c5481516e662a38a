//! Pre-smoothing filters applied before the peak search.

use crate::spectrum::Spectrum;
use crate::util::PeakResult;

pub mod gaussian;
pub mod savgol;

pub use gaussian::GaussianKernel;
pub use savgol::SavitzkyGolay;

/// A smoothing filter over uniformly indexed values.
pub trait Smoother {
    /// Returns the smoothed copy of `values`.
    fn smooth(&self, values: &[f64]) -> PeakResult<Vec<f64>>;

    /// Smooths the values of a spectrum, keeping its positions.
    fn smooth_spectrum(&self, spectrum: &Spectrum) -> PeakResult<Spectrum> {
        spectrum.with_values(self.smooth(spectrum.values())?)
    }
}
