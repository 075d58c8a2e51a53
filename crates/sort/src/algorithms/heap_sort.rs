use std::ops::Range;

use crate::error::Result;

use super::common;

pub fn sort<T: Ord>(data: &mut [T]) {
    heap_sort(data);
}

pub fn sort_range<T: Ord>(data: &mut [T], range: Range<usize>) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    heap_sort(&mut data[range]);
    Ok(())
}

pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end);
        end -= 1;
    }
}

/// Restores the max-heap property below `root` within `data[..end]`.
#[inline]
fn sift_down<T: Ord>(data: &mut [T], mut root: usize, end: usize) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && data[child] < data[child + 1] {
            swap_idx = child + 1;
        }

        if data[root] >= data[swap_idx] {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}
