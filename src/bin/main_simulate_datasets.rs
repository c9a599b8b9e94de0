//! # tagsim
//!
//! Companion tool to read collapsing test suites which writes artificial
//! single-end, paired-end, and per-sample occurrence datasets.
use clap::Parser;
use std::path::PathBuf;
use tagsim_core::{Error, SimulationConfig, simulate_datasets};

/// Main command line parsing struct.
#[derive(Parser, Debug)]
#[command(author, version,
    about = "Simulate single-end, paired-end and per-sample occurrence datasets for testing read collapsers",
    long_about = None)]
struct Cli {
    /// Input JSON configuration; built-in defaults are used if absent.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the random generator, overriding any seed in the configuration.
    #[arg(long)]
    seed: Option<u64>,
    /// Output directory; created if missing, pre-existing files are overwritten.
    output_dir: PathBuf,
}

/// Main function, run the program. All business logic handled by `run`
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error during execution: {e}");
            std::process::exit(1);
        }
    }
}

/// Loads the configuration and calls `simulate_datasets::run`.
///
/// # Errors
/// Returns errors from reading the configuration or simulating datasets
fn run(cli: &Cli) -> Result<(), Error> {
    let mut config: SimulationConfig = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let _ = simulate_datasets::run(&config, &cli.output_dir)?;
    Ok(())
}
