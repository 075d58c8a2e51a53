mod algorithms;
mod error;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use algorithms::{
    common, heap_sort, insertion_sort, introsort, merge, merge_sort, partition, quick_sort,
};
pub use error::{Result, SortError};
pub use introsort::IntroStats;
pub use merge_sort::{MergeInsertionSort, MergeStats};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    Introsort,
    HeapSort,
    MergeSort,
    MergeInsertionSort { threshold: usize },
}

pub const DEFAULT_MERGE_THRESHOLD: usize = 20;

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::QuickSort,
    SortAlgorithm::Introsort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::MergeInsertionSort {
        threshold: DEFAULT_MERGE_THRESHOLD,
    },
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "quicksort",
        SortAlgorithm::Introsort => "introsort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::MergeInsertionSort { .. } => "merge_insertion_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_cutoff: usize,
    pub introsort_depth_factor: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_cutoff: 16,
    introsort_depth_factor: 2,
};

pub const DEFAULT_PIVOT_SEED: u64 = 19_454_651;

/// Where pivot randomness comes from.
///
/// `Fixed` makes every run over the same input take the same partitions;
/// `Entropy` draws a fresh seed from the OS for each context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PivotSeed {
    Fixed(u64),
    Entropy,
}

impl Default for PivotSeed {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PIVOT_SEED)
    }
}

impl PivotSeed {
    pub fn rng(self) -> StdRng {
        match self {
            Self::Fixed(seed) => StdRng::seed_from_u64(seed),
            Self::Entropy => StdRng::from_os_rng(),
        }
    }
}

/// Pivot generator shared by the partition-based sorts of one caller.
#[derive(Clone, Debug)]
pub struct SortContext {
    pub(crate) rng: StdRng,
}

impl Default for SortContext {
    fn default() -> Self {
        Self::new(PivotSeed::default())
    }
}

impl SortContext {
    pub fn new(seed: PivotSeed) -> Self {
        Self { rng: seed.rng() }
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

pub fn sort<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) -> Result<()> {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, &mut ctx)
}

pub fn sort_with_ctx<T: Ord + Clone>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext,
) -> Result<()> {
    match algo {
        SortAlgorithm::QuickSort => quick_sort::sort(data, ctx),
        SortAlgorithm::Introsort => introsort::sort(data, ctx),
        SortAlgorithm::HeapSort => heap_sort::sort(data),
        SortAlgorithm::MergeSort => merge_sort::sort(data),
        SortAlgorithm::MergeInsertionSort { threshold } => {
            MergeInsertionSort::new(threshold)?.sort(data)
        }
    }
    Ok(())
}
