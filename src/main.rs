//! pagesim - compare LRU, FIFO and Clock fault counts by working-set size.

use anyhow::{Context, Result};
use clap::Parser;
use pagesim::common::config::{DEFAULT_SEED, DEFAULT_TRIALS, MAX_WSS, MIN_WSS, TRACE_LENGTH};
use pagesim::experiment::{Experiment, ExperimentConfig};
use pagesim::trace::TraceConfig;

/// Monte Carlo page replacement simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of independent trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for trace generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Smallest working-set size
    #[arg(long, default_value_t = MIN_WSS)]
    min_wss: usize,

    /// Largest working-set size (inclusive)
    #[arg(long, default_value_t = MAX_WSS)]
    max_wss: usize,

    /// References per trace
    #[arg(short = 'n', long, default_value_t = TRACE_LENGTH)]
    trace_length: usize,

    /// Run trials in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = ExperimentConfig {
        trials: args.trials,
        wss_min: args.min_wss,
        wss_max: args.max_wss,
        seed: args.seed,
        parallel: args.parallel,
        trace: TraceConfig {
            length: args.trace_length,
            ..TraceConfig::default()
        },
    };

    let experiment = Experiment::new(config).context("Invalid experiment configuration")?;
    let results = experiment.run();

    let stdout = std::io::stdout();
    pagesim::write_report(&results, stdout.lock()).context("Failed to write report")?;

    Ok(())
}
