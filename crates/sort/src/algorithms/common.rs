use std::ops::Range;

use crate::TUNED_PARAMS;
use crate::error::{Result, SortError};

#[inline]
pub fn check_range(range: Range<usize>, len: usize) -> Result<Range<usize>> {
    if range.start > range.end || range.end > len {
        return Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(range)
}

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

/// Partition levels introsort may descend before handing a range to heap sort.
#[inline]
pub fn introsort_depth_limit(n: usize) -> usize {
    floor_log2(n) * TUNED_PARAMS.introsort_depth_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_log2_small_values() {
        let expected = [0, 0, 1, 1, 2, 2, 2, 2, 3];
        for (n, &log) in expected.iter().enumerate() {
            assert_eq!(floor_log2(n), log, "n={n}");
        }
        assert_eq!(floor_log2(10_000), 13);
        assert_eq!(floor_log2(1 << 20), 20);
    }

    #[test]
    fn depth_limit_is_twice_log2() {
        assert_eq!(introsort_depth_limit(0), 0);
        assert_eq!(introsort_depth_limit(1), 0);
        assert_eq!(introsort_depth_limit(17), 8);
        assert_eq!(introsort_depth_limit(10_000), 26);
    }

    #[test]
    fn check_range_bounds() {
        assert_eq!(check_range(0..0, 0), Ok(0..0));
        assert_eq!(check_range(2..5, 5), Ok(2..5));
        assert_eq!(check_range(5..5, 5), Ok(5..5));
        assert_eq!(
            check_range(3..6, 5),
            Err(SortError::InvalidRange {
                start: 3,
                end: 6,
                len: 5
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 4..2;
        assert!(check_range(reversed, 5).is_err());
    }

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_non_decreasing::<i32>(&[]));
        assert!(is_sorted_non_decreasing(&[1]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2, 3]));
        assert!(!is_sorted_non_decreasing(&[2, 1]));
    }
}
