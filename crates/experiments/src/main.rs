use std::path::PathBuf;

use anyhow::Context;
use experiments::ExperimentConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "experiments=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) if path.exists() => ExperimentConfig::load(&path)?,
        Some(path) => {
            warn!(path = %path.display(), "config file not found, using defaults");
            ExperimentConfig::default()
        }
        None => ExperimentConfig::default(),
    };
    info!(?config, "starting sort experiments");

    let written = experiments::run(&config).context("experiment run failed")?;
    info!(
        tables = written.len(),
        output_dir = %config.output_dir.display(),
        "results saved"
    );
    Ok(())
}
