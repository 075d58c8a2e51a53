use std::ops::Range;

use crate::error::{Result, SortError};

use super::common;

/// Merges the sorted runs `data[..mid]` and `data[mid..]` through a buffer
/// sized to `data`. On ties the left run wins, so the merge is stable.
pub fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    debug_assert!(mid <= data.len());
    if mid == 0 || mid == data.len() {
        return;
    }

    let mut buf = Vec::with_capacity(data.len());
    let (left, right) = data.split_at(mid);
    let mut i = 0usize;
    let mut j = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            buf.push(left[i].clone());
            i += 1;
        } else {
            buf.push(right[j].clone());
            j += 1;
        }
    }
    buf.extend_from_slice(&left[i..]);
    buf.extend_from_slice(&right[j..]);

    data.clone_from_slice(&buf);
}

/// Merges `data[range.start..mid]` with `data[mid..range.end]`.
pub fn merge_range<T: Ord + Clone>(data: &mut [T], range: Range<usize>, mid: usize) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    if mid < range.start || mid > range.end {
        return Err(SortError::InvalidSplit {
            mid,
            start: range.start,
            end: range.end,
        });
    }
    let offset = range.start;
    merge(&mut data[range], mid - offset);
    Ok(())
}
