//! Owned sample series and their text-file form.
//!
//! `Spectrum` holds parallel position/value arrays of equal length. The `io`
//! submodule reads and writes the two-column whitespace-separated format.

use crate::util::{PeakError, PeakResult};

pub mod io;

/// Parallel position and value arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    positions: Vec<f64>,
    values: Vec<f64>,
}

impl Spectrum {
    /// Creates a spectrum from two arrays of equal length.
    pub fn new(positions: Vec<f64>, values: Vec<f64>) -> PeakResult<Self> {
        if positions.len() != values.len() {
            return Err(PeakError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }
        Ok(Self { positions, values })
    }

    /// Creates an empty spectrum with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends one sample.
    pub fn push(&mut self, position: f64, value: f64) {
        self.positions.push(position);
        self.values.push(value);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sample positions.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a spectrum with the same positions and new values.
    pub fn with_values(&self, values: Vec<f64>) -> PeakResult<Self> {
        Self::new(self.positions.clone(), values)
    }

    /// Splits the spectrum into its position and value arrays.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.positions, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::Spectrum;
    use crate::PeakError;

    #[test]
    fn new_rejects_unequal_lengths() {
        let err = Spectrum::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            PeakError::LengthMismatch {
                positions: 2,
                values: 1
            }
        );
    }

    #[test]
    fn push_keeps_arrays_parallel() {
        let mut spectrum = Spectrum::with_capacity(2);
        assert!(spectrum.is_empty());
        spectrum.push(1.0, 10.0);
        spectrum.push(2.0, 20.0);
        assert_eq!(spectrum.len(), 2);
        assert_eq!(spectrum.positions(), &[1.0, 2.0]);
        assert_eq!(spectrum.values(), &[10.0, 20.0]);
        let smoothed = spectrum.with_values(vec![11.0, 19.0]).unwrap();
        assert_eq!(smoothed.into_parts(), (vec![1.0, 2.0], vec![11.0, 19.0]));
    }
}
