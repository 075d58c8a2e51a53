use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};
use bench::generator::{Distribution, generate, prefix};
use sort::{SortAlgorithm, SortContext, algorithm_name, common, sort_with_ctx};
use tracing::{debug, info};

use crate::config::ExperimentConfig;
use crate::report::{Aggregate, TableWriter};

/// One family of tables: an algorithm, how often each row is timed, and how
/// the runs are summarized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TablePlan {
    pub name: &'static str,
    pub variants: Vec<(SortAlgorithm, Option<usize>)>,
    pub runs: usize,
    pub aggregate: Aggregate,
}

impl TablePlan {
    fn single(algo: SortAlgorithm, runs: usize, aggregate: Aggregate) -> Self {
        Self {
            name: algorithm_name(algo),
            variants: vec![(algo, None)],
            runs,
            aggregate,
        }
    }

    fn with_threshold(&self) -> bool {
        self.variants.iter().any(|(_, threshold)| threshold.is_some())
    }
}

pub fn plans(config: &ExperimentConfig) -> Vec<TablePlan> {
    let merge_insertion = TablePlan {
        name: algorithm_name(SortAlgorithm::MergeInsertionSort { threshold: 1 }),
        variants: config
            .thresholds
            .iter()
            .map(|&threshold| {
                (
                    SortAlgorithm::MergeInsertionSort { threshold },
                    Some(threshold),
                )
            })
            .collect(),
        runs: config.merge_runs,
        aggregate: Aggregate::Mean,
    };

    vec![
        TablePlan::single(SortAlgorithm::QuickSort, config.quick_runs, Aggregate::Median),
        TablePlan::single(SortAlgorithm::Introsort, config.quick_runs, Aggregate::Median),
        TablePlan::single(SortAlgorithm::MergeSort, config.merge_runs, Aggregate::Mean),
        merge_insertion,
    ]
}

/// One base array of `max_size` elements per configured distribution.
/// Every plan slices its inputs from the same base, so the tables of one
/// distribution time identical data.
pub fn base_arrays(config: &ExperimentConfig) -> anyhow::Result<Vec<(Distribution, Vec<i32>)>> {
    let mut data_rng = bench::rng_from_seed(config.data_seed);
    Ok(config
        .parsed_distributions()?
        .into_iter()
        .map(|dist| (dist, generate(dist, config.max_size, &mut data_rng)))
        .collect())
}

/// Visits every (plan, distribution) table in output order with its base array.
pub fn for_each_table<F>(config: &ExperimentConfig, mut visit: F) -> anyhow::Result<()>
where
    F: FnMut(&TablePlan, Distribution, &[i32]) -> anyhow::Result<()>,
{
    let bases = base_arrays(config)?;
    for plan in plans(config) {
        if plan.variants.is_empty() {
            continue;
        }
        for (dist, base) in &bases {
            visit(&plan, *dist, base)?;
        }
    }
    Ok(())
}

/// Runs every plan over every configured distribution and returns the files written.
pub fn run(config: &ExperimentConfig) -> anyhow::Result<Vec<PathBuf>> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let sizes: Vec<usize> = config.sizes().collect();
    let mut ctx = SortContext::new(config.pivot_seed());
    let mut written = Vec::new();

    for_each_table(config, |plan, dist, base| {
        let path = config
            .output_dir
            .join(format!("{}_{}.csv", plan.name, dist.label()));
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        let started = Instant::now();
        write_table(BufWriter::new(file), plan, dist, base, &sizes, &mut ctx)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            table = %path.display(),
            elapsed_ms = started.elapsed().as_millis(),
            "{} {} done",
            plan.name,
            dist.label(),
        );
        written.push(path);
        Ok(())
    })?;

    Ok(written)
}

pub fn write_table<W: Write>(
    out: W,
    plan: &TablePlan,
    dist: Distribution,
    base: &[i32],
    sizes: &[usize],
    ctx: &mut SortContext,
) -> anyhow::Result<W> {
    let mut table = TableWriter::new(out, plan.runs, plan.aggregate, plan.with_threshold());
    table.write_header()?;

    for &size in sizes {
        let input = prefix(base, size);
        for &(algo, threshold) in &plan.variants {
            let times = measure(algo, &input, plan.runs, ctx)?;
            debug!(
                algorithm = algorithm_name(algo),
                distribution = dist.label(),
                size,
                ?threshold,
                aggregate_us = plan.aggregate.apply(&times),
                "row timed"
            );
            table.write_row(size, threshold, &times)?;
        }
    }

    Ok(table.finish()?)
}

/// Times `runs` sorts of fresh copies of `input`, in microseconds.
pub fn measure(
    algo: SortAlgorithm,
    input: &[i32],
    runs: usize,
    ctx: &mut SortContext,
) -> anyhow::Result<Vec<u128>> {
    let mut times = Vec::with_capacity(runs);
    for _ in 0..runs {
        let mut data = input.to_vec();
        let start = Instant::now();
        sort_with_ctx(algo, &mut data, ctx)?;
        times.push(start.elapsed().as_micros());

        if data.len() != input.len() || !common::is_sorted_non_decreasing(&data) {
            bail!(
                "{} produced an unsorted result for {} elements",
                algorithm_name(algo),
                input.len()
            );
        }
    }
    Ok(times)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn small_config(output_dir: PathBuf) -> ExperimentConfig {
        ExperimentConfig {
            output_dir,
            min_size: 10,
            max_size: 50,
            size_step: 20,
            thresholds: vec![2, 5],
            quick_runs: 3,
            merge_runs: 2,
            ..ExperimentConfig::default()
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("experiments-{name}-{}", std::process::id()))
    }

    #[test]
    fn plans_follow_config() {
        let config = small_config(PathBuf::from("unused"));
        let plans = plans(&config);
        let names: Vec<_> = plans.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["quicksort", "introsort", "merge_sort", "merge_insertion_sort"]
        );
        assert_eq!(plans[0].aggregate, Aggregate::Median);
        assert_eq!(plans[0].runs, 3);
        assert_eq!(plans[3].runs, 2);
        assert_eq!(
            plans[3].variants,
            [
                (SortAlgorithm::MergeInsertionSort { threshold: 2 }, Some(2)),
                (SortAlgorithm::MergeInsertionSort { threshold: 5 }, Some(5)),
            ]
        );
    }

    #[test]
    fn measure_returns_one_time_per_run() {
        let mut ctx = SortContext::default();
        let input: Vec<i32> = (0..200).rev().collect();
        let times = measure(SortAlgorithm::Introsort, &input, 4, &mut ctx).unwrap();
        assert_eq!(times.len(), 4);
    }

    #[test]
    fn measure_surfaces_bad_configuration() {
        let mut ctx = SortContext::default();
        let result = measure(
            SortAlgorithm::MergeInsertionSort { threshold: 0 },
            &[3, 1, 2],
            1,
            &mut ctx,
        );
        assert!(result.is_err());
    }

    #[test]
    fn table_has_a_row_per_size_and_threshold() {
        let config = small_config(PathBuf::from("unused"));
        let plan = plans(&config).pop().unwrap();
        let base = generate(Distribution::Random, 50, &mut bench::default_rng());
        let sizes: Vec<usize> = config.sizes().collect();
        let mut ctx = SortContext::default();

        let out = write_table(Vec::new(), &plan, Distribution::Random, &base, &sizes, &mut ctx)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "size;threshold;time_run1_us;time_run2_us;average_us");
        assert_eq!(lines.len(), 1 + sizes.len() * 2);
        assert!(lines[1].starts_with("10;2;"));
        assert!(lines[2].starts_with("10;5;"));
        assert!(lines[5].starts_with("50;2;"));
        assert!(lines[1..].iter().all(|l| l.split(';').count() == 5));
    }

    #[test]
    fn every_plan_times_the_same_base_per_distribution() {
        let config = small_config(PathBuf::from("unused"));
        let mut seen: Vec<(&'static str, Distribution, Vec<i32>)> = Vec::new();
        for_each_table(&config, |plan, dist, base| {
            seen.push((plan.name, dist, base.to_vec()));
            Ok(())
        })
        .unwrap();

        assert_eq!(seen.len(), 4 * 3);
        for dist in config.parsed_distributions().unwrap() {
            let bases: Vec<_> = seen.iter().filter(|(_, d, _)| *d == dist).collect();
            assert_eq!(bases.len(), 4);
            for (name, _, base) in &bases[1..] {
                assert_eq!(
                    base, &bases[0].2,
                    "{name} and {} time different {} inputs",
                    bases[0].0,
                    dist.label()
                );
            }
        }
        let quick = seen
            .iter()
            .find(|(name, d, _)| *name == "quicksort" && *d == Distribution::Random);
        let intro = seen
            .iter()
            .find(|(name, d, _)| *name == "introsort" && *d == Distribution::Random);
        assert_eq!(quick.map(|t| &t.2), intro.map(|t| &t.2));
    }

    #[test]
    fn base_arrays_are_reproducible() {
        let config = small_config(PathBuf::from("unused"));
        let first = base_arrays(&config).unwrap();
        let second = base_arrays(&config).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|(_, base)| base.len() == config.max_size));
    }

    #[test]
    fn run_writes_one_file_per_plan_and_distribution() {
        let dir = scratch_dir("run");
        let config = small_config(dir.clone());
        let written = run(&config).unwrap();

        assert_eq!(written.len(), 4 * 3);
        assert!(written.contains(&dir.join("introsort_reversed.csv")));
        assert!(written.contains(&dir.join("merge_insertion_sort_nearly_sorted.csv")));
        for path in &written {
            let text = fs::read_to_string(path).unwrap();
            assert!(text.lines().count() > 1, "{}", path.display());
        }

        fs::remove_dir_all(Path::new(&dir)).unwrap();
    }
}
