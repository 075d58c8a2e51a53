use std::ops::Range;

use rand::Rng;

use crate::SortContext;
use crate::error::Result;

use super::{common, partition};

pub fn sort<T: Ord>(data: &mut [T], ctx: &mut SortContext) {
    quick_sort(data, &mut ctx.rng);
}

pub fn sort_range<T: Ord>(
    data: &mut [T],
    range: Range<usize>,
    ctx: &mut SortContext,
) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    quick_sort(&mut data[range], &mut ctx.rng);
    Ok(())
}

/// Randomized quicksort with no depth bound and no small-range cutoff.
///
/// Recursion depth is linear in the worst case; kept as the control for
/// [`super::introsort`].
pub fn quick_sort<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    if data.len() <= 1 {
        return;
    }

    let p = partition::partition(data, rng);
    let (left, rest) = data.split_at_mut(p);
    quick_sort(left, rng);
    quick_sort(&mut rest[1..], rng);
}
