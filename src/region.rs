//! Inclusive index intervals over the sample domain.

use crate::util::{PeakError, PeakResult};
use std::ops::RangeInclusive;

/// A non-empty, inclusive interval of sample indices.
///
/// `length == end_inclusive - start_inclusive + 1` always holds and is at
/// least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start_inclusive: usize,
    end_inclusive: usize,
    length: usize,
}

impl IndexRange {
    /// Creates a range from its first index and number of indices.
    pub fn from_start_len(start_inclusive: usize, length: usize) -> PeakResult<Self> {
        if length == 0 {
            return Err(PeakError::InvalidRange {
                start: start_inclusive,
                end: start_inclusive,
            });
        }
        let end_inclusive =
            start_inclusive
                .checked_add(length - 1)
                .ok_or(PeakError::InvalidRange {
                    start: start_inclusive,
                    end: usize::MAX,
                })?;
        Ok(Self {
            start_inclusive,
            end_inclusive,
            length,
        })
    }

    /// Creates a range from its first and last index.
    pub fn from_start_end(start_inclusive: usize, end_inclusive: usize) -> PeakResult<Self> {
        if end_inclusive < start_inclusive {
            return Err(PeakError::InvalidRange {
                start: start_inclusive,
                end: end_inclusive,
            });
        }
        let length = (end_inclusive - start_inclusive)
            .checked_add(1)
            .ok_or(PeakError::InvalidRange {
                start: start_inclusive,
                end: end_inclusive,
            })?;
        Ok(Self {
            start_inclusive,
            end_inclusive,
            length,
        })
    }

    /// Creates a range covering every index of a slice.
    pub fn covering<T>(data: &[T]) -> PeakResult<Self> {
        Self::from_start_len(0, data.len())
    }

    /// First index in the range.
    pub fn start_inclusive(&self) -> usize {
        self.start_inclusive
    }

    /// Last index in the range.
    pub fn end_inclusive(&self) -> usize {
        self.end_inclusive
    }

    /// Number of indices in the range.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` if `index` lies inside the range.
    pub fn contains(&self, index: usize) -> bool {
        self.start_inclusive <= index && index <= self.end_inclusive
    }

    /// Iterates over the indices of the range.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start_inclusive..=self.end_inclusive
    }
}
