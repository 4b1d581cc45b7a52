//! Run command implementation
//!
//! Runs one estimate and prints the result.

use std::time::Instant;

use pi_estimator::mc::Estimator;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{mode_label, render_run, OutputFormat, RunReport};
use crate::Result;

/// Run the estimate described by `config`
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = estimate(config)?;
    println!("{}", render_run(&report, format)?);
    Ok(())
}

/// Execute the estimate and time it
pub fn estimate(config: &CliConfig) -> Result<RunReport> {
    let estimator = Estimator::new(config.estimator.to_estimator_config()?)?;
    let kernel = estimator.config();

    info!(
        trials = kernel.n_trials(),
        seed = kernel.seed(),
        generator = %kernel.generator(),
        mode = %mode_label(kernel.mode()),
        "Starting estimate"
    );
    if let Some(threads) = kernel.threads() {
        debug!(threads, "Using dedicated thread pool");
    }

    let start = Instant::now();
    let result = estimator.run();
    let elapsed = start.elapsed();

    info!(
        inside = result.inside,
        pi = result.pi_estimate(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Estimate complete"
    );

    Ok(RunReport::new(result, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_small_reference_run() {
        let mut config = CliConfig::default();
        config.estimator.trials = 1_000;

        let report = estimate(&config).unwrap();
        assert_eq!(report.result.inside, 803);
        assert_eq!(report.result.trials, 1_000);
    }

    #[test]
    fn test_estimate_rejects_zero_chunk() {
        let mut config = CliConfig::default();
        config.estimator.parallel = true;
        config.estimator.chunk_size = 0;

        assert!(matches!(
            estimate(&config),
            Err(crate::CliError::Estimator(_))
        ));
    }
}
