use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use bench::Distribution;
use serde::Deserialize;
use sort::{DEFAULT_PIVOT_SEED, MergeInsertionSort, PivotSeed};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub output_dir: PathBuf,
    pub min_size: usize,
    pub max_size: usize,
    pub size_step: usize,
    pub thresholds: Vec<usize>,
    /// Timed runs per row for quicksort and introsort tables.
    pub quick_runs: usize,
    /// Timed runs per row for the merge sort tables.
    pub merge_runs: usize,
    pub distributions: Vec<String>,
    pub data_seed: u64,
    /// `null` draws pivots from OS entropy.
    pub pivot_seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results"),
            min_size: 500,
            max_size: 100_000,
            size_step: 100,
            thresholds: vec![5, 10, 20, 30, 50],
            quick_runs: 9,
            merge_runs: 3,
            distributions: ["random", "reversed", "nearly_sorted"]
                .into_iter()
                .map(String::from)
                .collect(),
            data_seed: bench::RNG_SEED,
            pivot_seed: Some(DEFAULT_PIVOT_SEED),
        }
    }
}

impl ExperimentConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("malformed experiment config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.size_step == 0 {
            bail!("size_step must be positive");
        }
        if self.min_size > self.max_size {
            bail!(
                "min_size {} exceeds max_size {}",
                self.min_size,
                self.max_size
            );
        }
        if self.quick_runs == 0 || self.merge_runs == 0 {
            bail!("run counts must be positive");
        }
        for &threshold in &self.thresholds {
            MergeInsertionSort::new(threshold)?;
        }
        self.parsed_distributions()?;
        Ok(())
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (self.min_size..=self.max_size).step_by(self.size_step)
    }

    pub fn pivot_seed(&self) -> PivotSeed {
        self.pivot_seed.map_or(PivotSeed::Entropy, PivotSeed::Fixed)
    }

    pub fn parsed_distributions(&self) -> anyhow::Result<Vec<Distribution>> {
        self.distributions
            .iter()
            .map(|label| {
                Distribution::from_label(label)
                    .with_context(|| format!("unknown distribution {label:?}"))
            })
            .collect()
    }
}
