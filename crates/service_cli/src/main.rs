//! montepi - Monte Carlo pi estimation from the command line
//!
//! # Commands
//!
//! - `montepi` - Run the reference estimate (10,000,000 trials, seed 42)
//! - `montepi run [OPTIONS]` - Run an estimate with overrides
//! - `montepi bench [OPTIONS]` - Time repeated estimates
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns configuration, logging
//! and output; the `pi_estimator` kernel does the counting.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};
use output::OutputFormat;

/// Monte Carlo pi estimator CLI
#[derive(Parser)]
#[command(name = "montepi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format, default: montepi.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MONTEPI_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Estimate parameters shared by every command
#[derive(Args, Clone, Debug, Default)]
struct EstimateArgs {
    /// Number of trials
    #[arg(short = 'n', long, env = "MONTEPI_TRIALS")]
    trials: Option<u64>,

    /// Generator seed
    #[arg(short, long, env = "MONTEPI_SEED")]
    seed: Option<u64>,

    /// Generator (xorshift64, std)
    #[arg(short, long)]
    generator: Option<String>,

    /// Count trials in parallel chunks
    #[arg(long)]
    parallel: bool,

    /// Trials per parallel chunk
    #[arg(long)]
    chunk_size: Option<u64>,

    /// Worker threads for parallel mode (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single estimate
    Run(EstimateArgs),

    /// Time repeated estimates
    Bench {
        #[command(flatten)]
        estimate: EstimateArgs,

        /// Number of measured runs
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Exclude the first run from averages
        #[arg(long)]
        skip_first: bool,

        /// Bench every generator and execution mode
        #[arg(long)]
        all: bool,

        /// Bench only matching variants (e.g. std, parallel, xorshift64/sequential); repeatable
        #[arg(long = "variant", value_name = "VARIANT")]
        variants: Vec<String>,
    },
}

fn overrides(cli: &Cli, estimate: &EstimateArgs) -> CliOverrides {
    CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        trials: estimate.trials,
        seed: estimate.seed,
        generator: estimate.generator.clone(),
        parallel: estimate.parallel,
        chunk_size: estimate.chunk_size,
        threads: estimate.threads,
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    let default_args = EstimateArgs {
        format: "table".to_string(),
        ..Default::default()
    };
    let estimate = match &cli.command {
        Some(Commands::Run(args)) => args,
        Some(Commands::Bench { estimate, .. }) => estimate,
        None => &default_args,
    };

    let config = build_config(&overrides(&cli, estimate))?;
    let format: OutputFormat = estimate.format.parse()?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Some(Commands::Bench {
            runs,
            skip_first,
            all,
            variants,
            ..
        }) => commands::bench::run(
            &config,
            &commands::bench::BenchOptions {
                runs: *runs,
                skip_first: *skip_first,
                all_variants: *all,
                only: variants.clone(),
                format,
            },
        ),
        Some(Commands::Run(_)) | None => commands::run::run(&config, format),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = execute(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
