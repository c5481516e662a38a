//! Peakloc locates local maxima of a sampled 1D curve with sub-sample
//! precision.
//!
//! The second derivative is estimated pointwise with closed-form local
//! quadratic regression, the domain is split into concave runs, and each run
//! is refined to a single peak position by a quadratic vertex fit, a
//! derivative zero crossing, or the run midpoint. Optional parallelism is
//! available via the `rayon` feature and structured events via `tracing`.
//!
//! ```
//! let positions = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let values = [0.0, 5.0, 8.0, 9.0, 8.0, 5.0, 0.0];
//! let peaks = peakloc::search_peaks(&positions, &values, 1).unwrap();
//! assert_eq!(peaks.len(), 1);
//! assert!((peaks[0] - 3.0).abs() < 1e-9);
//! ```

mod trace;

pub mod filter;
pub mod fit;
pub mod lowlevel;
pub mod refine;
pub mod region;
pub mod scaling;
pub mod search;
pub mod spectrum;
pub mod util;

pub use filter::{GaussianKernel, SavitzkyGolay, Smoother};
pub use fit::{full_width, QuadraticFit};
pub use region::IndexRange;
pub use scaling::{Interval, Scaling};
pub use search::{
    search_peaks, OutputDomain, Peak, PeakSearch, RefinementMethod, SearchConfig,
};
pub use spectrum::io::{load_spectrum, read_spectrum, save_spectrum, write_spectrum, ValueTransform};
pub use spectrum::Spectrum;
pub use util::{PeakError, PeakResult};
