use anyhow::{Context, Result};
use clap::Parser;
use exoview::classifier::HttpClassifier;
use exoview::config::Config;
use exoview::constants::{SAMPLE_DATASET_SIZE, SAMPLE_SEED, STATUS_LOADING_SAMPLE};
use exoview::ingest::{load_dataset, sample_dataset};
use exoview::logger::Logger;
use exoview::records::Dataset;
use exoview::ui::{self, core::AppContext};
use log::{info, warn, LevelFilter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Terminal dashboard for exoplanet candidate datasets
#[derive(Parser, Debug)]
#[command(name = "exoview", version, about)]
struct Args {
    /// Configuration file (defaults to ./exoview.toml, then the XDG config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Candidate CSV to open instead of the sample dataset
    #[arg(short, long, value_name = "CSV")]
    data: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

/// The requested CSV, or the sample dataset when none is given or it fails to parse
fn initial_dataset(path: Option<&Path>) -> Dataset {
    if let Some(path) = path {
        match load_dataset(path) {
            Ok(dataset) => return dataset,
            Err(e) => warn!("{}: {}", path.display(), e),
        }
    }
    info!("{} ({} records)", STATUS_LOADING_SAMPLE, SAMPLE_DATASET_SIZE);
    sample_dataset(SAMPLE_DATASET_SIZE, SAMPLE_SEED)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        return Config::generate_default_config(path);
    }

    let config = load_config(args.config.as_deref())?;

    let logger = Logger::from_config(&config.logging)?;
    logger.init(config.logging.level_filter().unwrap_or(LevelFilter::Info))?;

    let classifier = HttpClassifier::from_config(&config.service).context("Failed to build the service client")?;
    info!("service: {}", classifier.base_url());

    let dataset = initial_dataset(args.data.as_deref());
    let context = AppContext::new(config, logger, Arc::new(classifier));

    ui::run_app(context, dataset.shared()).await
}
