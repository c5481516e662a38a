//! Segmentation of a curvature curve into concave candidate regions.

use crate::region::IndexRange;

/// Shortest concave run that is treated as a peak.
pub const MIN_REGION_LENGTH: usize = 3;

/// Returns the maximal runs where `second_derivative < 0`, in index order.
///
/// Runs shorter than [`MIN_REGION_LENGTH`] are dropped. NaN never counts as
/// concave.
pub fn concave_regions(second_derivative: &[f64]) -> Vec<IndexRange> {
    let mut regions = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, &value) in second_derivative.iter().enumerate() {
        match (value < 0.0, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                push_run(&mut regions, start, i - 1);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        push_run(&mut regions, start, second_derivative.len() - 1);
    }
    regions
}

fn push_run(regions: &mut Vec<IndexRange>, start: usize, end: usize) {
    if end - start + 1 < MIN_REGION_LENGTH {
        return;
    }
    if let Ok(region) = IndexRange::from_start_end(start, end) {
        regions.push(region);
    }
}
