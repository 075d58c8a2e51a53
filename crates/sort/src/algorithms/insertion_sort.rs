use std::ops::Range;

use crate::error::Result;

use super::common;

pub fn sort<T: Ord>(data: &mut [T]) {
    insertion_sort(data);
}

pub fn sort_range<T: Ord>(data: &mut [T], range: Range<usize>) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    insertion_sort(&mut data[range]);
    Ok(())
}

/// Stable: an element only moves left past strictly greater elements.
#[inline]
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && data[j - 1] > data[i] {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{keyed, tags};

    #[test]
    fn sorts_small_inputs() {
        let mut data = [5, 3, 8, 1, 9, 2];
        sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);

        let mut empty: [i32; 0] = [];
        sort(&mut empty);

        let mut single = [7];
        sort(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn keeps_equal_elements_in_order() {
        let mut data = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        sort(&mut data);
        assert_eq!(tags(&data), "bdac");
    }

    #[test]
    fn sorts_only_the_requested_range() {
        let mut data = [9, 4, 3, 2, 1, 0];
        sort_range(&mut data, 1..5).unwrap();
        assert_eq!(data, [9, 1, 2, 3, 4, 0]);
        assert!(sort_range(&mut data, 2..7).is_err());
    }
}
