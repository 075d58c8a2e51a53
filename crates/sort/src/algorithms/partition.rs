use std::ops::Range;

use rand::Rng;

use crate::error::{Result, SortError};

use super::common;

/// Lomuto partition around a uniformly drawn pivot.
///
/// Returns the pivot's final index `p`: every element in `data[..p]` is
/// `<= data[p]` and every element in `data[p..]` is `>= data[p]`.
/// `data` must be non-empty.
#[inline]
pub fn partition<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) -> usize {
    debug_assert!(!data.is_empty());

    let last = data.len() - 1;
    let pivot_idx = rng.random_range(0..=last);
    data.swap(pivot_idx, last);

    let mut boundary = 0usize;
    for j in 0..last {
        if data[j] <= data[last] {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, last);
    boundary
}

/// Partitions `data[range]` and returns the pivot's index in `data`.
pub fn partition_range<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    range: Range<usize>,
    rng: &mut R,
) -> Result<usize> {
    let range = common::check_range(range, data.len())?;
    if range.is_empty() {
        return Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len: data.len(),
        });
    }
    let offset = range.start;
    Ok(offset + partition(&mut data[range], rng))
}
