//! Peak search over a sampled curve.
//!
//! The search rescales positions into `[0, 1]`, estimates the second
//! derivative and its slope at every sample with local quadratic fits,
//! splits the domain into concave runs and refines one peak per run.

pub(crate) mod derivative;
pub(crate) mod refine;
pub(crate) mod segment;

use crate::fit::full_width;
use crate::region::IndexRange;
use crate::scaling::{Interval, Scaling};
use crate::spectrum::Spectrum;
use crate::trace::{stage_event, stage_span};
use crate::util::parallel::map_indexed;
use crate::util::{PeakError, PeakResult};
use derivative::{second_derivative, second_derivative_slope};
use refine::refine_region;
use segment::concave_regions;

/// Coordinate domain of reported peak positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputDomain {
    /// Positions in the caller's units.
    #[default]
    Original,
    /// Positions in the internal `[0, 1]` domain.
    Normalized,
}

/// Which refinement step produced a peak position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefinementMethod {
    /// Vertex of a quadratic fitted to the curvature.
    QuadraticVertex,
    /// Zero crossing of the curvature slope.
    ZeroCrossing,
    /// Midpoint of the candidate region.
    Midpoint,
}

impl RefinementMethod {
    /// Stable snake_case name, used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            RefinementMethod::QuadraticVertex => "quadratic_vertex",
            RefinementMethod::ZeroCrossing => "zero_crossing",
            RefinementMethod::Midpoint => "midpoint",
        }
    }
}

/// A refined peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Sub-sample peak position.
    pub position: f64,
    /// Concave region the peak was refined from.
    pub region: IndexRange,
    /// Refinement step that produced `position`.
    pub method: RefinementMethod,
}

/// Configuration for [`PeakSearch`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Half-width of the fitting windows; windows span `2 * half_width + 1`
    /// samples. Must be positive.
    pub half_width: usize,
    /// Domain of the reported positions.
    pub output_domain: OutputDomain,
    /// Run the curvature passes and refinement on the rayon pool (requires
    /// the `rayon` feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            half_width: 2,
            output_domain: OutputDomain::Original,
            parallel: false,
        }
    }
}

/// Curvature-based peak locator.
#[derive(Clone, Debug, Default)]
pub struct PeakSearch {
    cfg: SearchConfig,
}

impl PeakSearch {
    /// Creates a search with the given half-width and default settings.
    pub fn new(half_width: usize) -> Self {
        Self {
            cfg: SearchConfig {
                half_width,
                ..SearchConfig::default()
            },
        }
    }

    /// Replaces the search configuration.
    pub fn with_config(mut self, cfg: SearchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.cfg
    }

    /// Locates peaks, one per concave region, in ascending index order.
    ///
    /// # Errors
    /// Mismatched lengths, fewer than three samples, or a zero half-width.
    /// Once those checks pass the search always returns a (possibly empty)
    /// list.
    pub fn search(&self, positions: &[f64], values: &[f64]) -> PeakResult<Vec<Peak>> {
        let half_width = self.cfg.half_width;
        if positions.len() != values.len() {
            return Err(PeakError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }
        if positions.len() < 3 {
            return Err(PeakError::TooFewPoints {
                needed: 3,
                got: positions.len(),
            });
        }
        if half_width == 0 {
            return Err(PeakError::InvalidHalfWidth { half_width });
        }
        full_width(half_width)?;

        let _span = stage_span!("search_peaks", points = positions.len(), half_width = half_width)
            .entered();

        let scaling = Scaling::for_data(positions, Interval::unit())?;
        let mut normalized = positions.to_vec();
        scaling.scale_in_place(&mut normalized);

        let d2 = second_derivative(&normalized, values, half_width, self.cfg.parallel)?;
        let slope = second_derivative_slope(&normalized, &d2, half_width, self.cfg.parallel)?;
        let regions = concave_regions(&d2);
        stage_event!("candidate_regions", count = regions.len());

        let mut peaks = map_indexed(regions.len(), self.cfg.parallel, |k| {
            refine_region(&normalized, &d2, &slope, regions[k], half_width)
        })
        .into_iter()
        .collect::<PeakResult<Vec<_>>>()?;

        if self.cfg.output_domain == OutputDomain::Original {
            for peak in peaks.iter_mut() {
                peak.position = scaling.unscale(peak.position);
            }
        }

        stage_event!(
            "refined_peaks",
            vertex = count_method(&peaks, RefinementMethod::QuadraticVertex),
            zero_crossing = count_method(&peaks, RefinementMethod::ZeroCrossing),
            midpoint = count_method(&peaks, RefinementMethod::Midpoint),
        );
        Ok(peaks)
    }

    /// Locates peaks and returns only their positions.
    pub fn search_positions(&self, positions: &[f64], values: &[f64]) -> PeakResult<Vec<f64>> {
        Ok(self
            .search(positions, values)?
            .into_iter()
            .map(|peak| peak.position)
            .collect())
    }

    /// Locates peaks in a [`Spectrum`].
    pub fn search_spectrum(&self, spectrum: &Spectrum) -> PeakResult<Vec<Peak>> {
        self.search(spectrum.positions(), spectrum.values())
    }
}

fn count_method(peaks: &[Peak], method: RefinementMethod) -> usize {
    peaks.iter().filter(|peak| peak.method == method).count()
}

/// Locates peak positions (in the caller's units) with default settings.
///
/// Shorthand for `PeakSearch::new(half_width).search_positions(..)`.
pub fn search_peaks(positions: &[f64], values: &[f64], half_width: usize) -> PeakResult<Vec<f64>> {
    PeakSearch::new(half_width).search_positions(positions, values)
}
