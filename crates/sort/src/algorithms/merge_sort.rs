use std::ops::Range;

use crate::error::{Result, SortError};

use super::{common, insertion_sort, merge};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeStats {
    pub merges: usize,
    pub insertion_runs: usize,
}

/// Plain top-down merge sort.
pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_recursive(data, 1, &mut MergeStats::default());
}

pub fn sort_range<T: Ord + Clone>(data: &mut [T], range: Range<usize>) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    sort(&mut data[range]);
    Ok(())
}

pub fn sort_with_stats<T: Ord + Clone>(data: &mut [T]) -> MergeStats {
    let mut stats = MergeStats::default();
    merge_sort_recursive(data, 1, &mut stats);
    stats
}

/// Merge sort that stops splitting once a range holds at most `threshold`
/// elements and insertion-sorts it instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MergeInsertionSort {
    threshold: usize,
}

impl MergeInsertionSort {
    pub fn new(threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(SortError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        self.sort_with_stats(data);
    }

    pub fn sort_range<T: Ord + Clone>(&self, data: &mut [T], range: Range<usize>) -> Result<()> {
        let range = common::check_range(range, data.len())?;
        self.sort(&mut data[range]);
        Ok(())
    }

    pub fn sort_with_stats<T: Ord + Clone>(&self, data: &mut [T]) -> MergeStats {
        let mut stats = MergeStats::default();
        merge_sort_recursive(data, self.threshold, &mut stats);
        stats
    }
}

fn merge_sort_recursive<T: Ord + Clone>(data: &mut [T], threshold: usize, stats: &mut MergeStats) {
    let len = data.len();
    if len <= 1 {
        return;
    }
    if len <= threshold {
        stats.insertion_runs += 1;
        insertion_sort::insertion_sort(data);
        return;
    }

    // The left half takes the middle element on odd lengths.
    let mid = len.div_ceil(2);
    let (left, right) = data.split_at_mut(mid);
    merge_sort_recursive(left, threshold, stats);
    merge_sort_recursive(right, threshold, stats);

    stats.merges += 1;
    merge::merge(data, mid);
}
