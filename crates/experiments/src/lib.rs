pub mod config;
pub mod report;
pub mod runner;

pub use config::ExperimentConfig;
pub use report::{Aggregate, TableWriter};
pub use runner::{TablePlan, base_arrays, for_each_table, measure, plans, run, write_table};
