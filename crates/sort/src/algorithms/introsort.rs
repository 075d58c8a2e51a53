use std::ops::Range;

use rand::Rng;

use crate::error::Result;
use crate::{SortContext, TUNED_PARAMS};

use super::{common, heap_sort, insertion_sort, partition};

/// What a single introsort call did on its way down.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IntroStats {
    /// Budget the call started with.
    pub depth_limit: usize,
    /// Deepest partition level reached; never exceeds `depth_limit`.
    pub max_depth: usize,
    pub heap_fallbacks: usize,
    pub insertion_runs: usize,
}

pub fn sort<T: Ord>(data: &mut [T], ctx: &mut SortContext) {
    introsort(data, &mut ctx.rng);
}

pub fn sort_range<T: Ord>(
    data: &mut [T],
    range: Range<usize>,
    ctx: &mut SortContext,
) -> Result<()> {
    let range = common::check_range(range, data.len())?;
    introsort(&mut data[range], &mut ctx.rng);
    Ok(())
}

pub fn introsort<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    sort_with_stats(data, rng);
}

/// Sorts with the budget fixed to `2 * floor(log2(n))` and reports what happened.
pub fn sort_with_stats<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) -> IntroStats {
    let depth_limit = common::introsort_depth_limit(data.len());
    sort_with_budget(data, depth_limit, rng)
}

/// Sorts with a caller-chosen recursion budget. A budget of zero sends every
/// range above the insertion cutoff straight to heap sort.
pub fn sort_with_budget<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    depth_limit: usize,
    rng: &mut R,
) -> IntroStats {
    let mut stats = IntroStats {
        depth_limit,
        ..IntroStats::default()
    };
    if data.len() <= 1 {
        return stats;
    }
    introsort_recursive(data, depth_limit, 0, rng, &mut stats);
    stats
}

fn introsort_recursive<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    budget: usize,
    depth: usize,
    rng: &mut R,
    stats: &mut IntroStats,
) {
    stats.max_depth = stats.max_depth.max(depth);

    if data.len() <= TUNED_PARAMS.insertion_cutoff {
        stats.insertion_runs += 1;
        insertion_sort::insertion_sort(data);
        return;
    }
    if budget == 0 {
        stats.heap_fallbacks += 1;
        heap_sort::heap_sort(data);
        return;
    }

    let p = partition::partition(data, rng);
    let (left, rest) = data.split_at_mut(p);
    introsort_recursive(left, budget - 1, depth + 1, rng, stats);
    introsort_recursive(&mut rest[1..], budget - 1, depth + 1, rng, stats);
}
