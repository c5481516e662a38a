//! Affine rescaling of sample data between intervals.
//!
//! Positions are mapped into `[0, 1]` before curvature estimation so that the
//! power sums of the quadratic fit stay well conditioned whatever the raw
//! coordinate magnitude.

use crate::util::{PeakError, PeakResult};

/// A closed interval `[min, max]` with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
    width: f64,
}

impl Interval {
    /// Creates an interval, swapping the bounds if given reversed.
    pub fn new(a: f64, b: f64) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min,
            max,
            width: max - min,
        }
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Affine map from the value interval of some data onto a target interval.
///
/// A scaling is degenerate when its source interval has zero width; every
/// scaled value then collapses to `target.min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaling {
    source: Interval,
    target: Interval,
}

impl Scaling {
    /// Builds the scaling that maps the min/max of `source_values` onto `target`.
    ///
    /// NaN entries are ignored when locating the extremes.
    pub fn for_data(source_values: &[f64], target: Interval) -> PeakResult<Self> {
        if source_values.is_empty() {
            return Err(PeakError::TooFewPoints { needed: 1, got: 0 });
        }
        let (min, max) = source_values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Ok(Self {
            source: Interval::new(min, max),
            target,
        })
    }

    /// Interval spanned by the source data.
    pub fn source(&self) -> Interval {
        self.source
    }

    /// Interval the data is mapped onto.
    pub fn target(&self) -> Interval {
        self.target
    }

    /// Returns `true` when the source interval has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.source.width == 0.0
    }

    /// Maps `data` onto the target interval in place.
    pub fn scale_in_place(&self, data: &mut [f64]) {
        if self.is_degenerate() {
            data.fill(self.target.min);
            return;
        }
        let multiplier = self.target.width / self.source.width;
        for value in data.iter_mut() {
            *value = (*value - self.source.min) * multiplier + self.target.min;
        }
    }

    /// Maps a single target-domain value back into the source domain.
    ///
    /// Degenerate scalings (either interval of zero width) return `source.min`.
    pub fn unscale(&self, value: f64) -> f64 {
        if self.is_degenerate() || self.target.width == 0.0 {
            return self.source.min;
        }
        (value - self.target.min) * (self.source.width / self.target.width) + self.source.min
    }
}
