use rand::Rng;

/// Values drawn by [`Distribution::Random`] lie in `0..=RANDOM_MAX`.
pub const RANDOM_MAX: i32 = 10_000;

/// One swap per this many elements when perturbing a sorted array.
pub const NEARLY_SORTED_SWAP_DIVISOR: usize = 25;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    Reversed,
    /// Sorted, then `n / 25` random neighbour swaps.
    NearlySorted,
    /// Sorted, then `n / 25` swaps of two arbitrary positions.
    NearlySortedScattered,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::Random,
    Distribution::Sorted,
    Distribution::Reversed,
    Distribution::NearlySorted,
    Distribution::NearlySortedScattered,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly_sorted",
            Self::NearlySortedScattered => "nearly_sorted_scattered",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ALL_DISTRIBUTIONS.into_iter().find(|d| d.label() == label)
    }
}

pub fn generate<R: Rng + ?Sized>(dist: Distribution, n: usize, rng: &mut R) -> Vec<i32> {
    match dist {
        Distribution::Random => (0..n).map(|_| rng.random_range(0..=RANDOM_MAX)).collect(),
        Distribution::Sorted => ascending(n),
        Distribution::Reversed => {
            let mut data = ascending(n);
            data.reverse();
            data
        }
        Distribution::NearlySorted => {
            let mut data = ascending(n);
            if n >= 2 {
                for _ in 0..n / NEARLY_SORTED_SWAP_DIVISOR {
                    let pos = rng.random_range(0..n - 1);
                    data.swap(pos, pos + 1);
                }
            }
            data
        }
        Distribution::NearlySortedScattered => {
            let mut data = ascending(n);
            if n >= 2 {
                for _ in 0..n / NEARLY_SORTED_SWAP_DIVISOR {
                    let a = rng.random_range(0..n);
                    let b = rng.random_range(0..n);
                    data.swap(a, b);
                }
            }
            data
        }
    }
}

/// Copies the first `n` elements of `base`, clamped to its length.
pub fn prefix(base: &[i32], n: usize) -> Vec<i32> {
    base[..n.min(base.len())].to_vec()
}

#[inline]
fn ascending(n: usize) -> Vec<i32> {
    (0..n).map(|i| i as i32).collect()
}
