//! Bench command implementation
//!
//! Times repeated estimates, optionally across every generator and execution
//! mode, and reports per-run timings plus averages sorted fastest first.

use std::time::{Duration, Instant};

use pi_estimator::mc::{Estimator, EstimatorConfig, ExecutionMode};
use pi_estimator::rng::GeneratorKind;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{as_millis_f64, mode_label, OutputFormat};
use crate::{CliError, Result};

/// Bench command options
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Timed runs per variant
    pub runs: usize,
    /// Exclude the first run from statistics
    pub skip_first: bool,
    /// Bench every generator/mode pair instead of the configured one
    pub all_variants: bool,
    /// Restrict the generator/mode pairs to those matching any filter
    pub only: Vec<String>,
    pub format: OutputFormat,
}

/// Variant filter such as `std`, `parallel` or `xorshift64/sequential`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantFilter {
    pub generator: Option<GeneratorKind>,
    pub parallel: Option<bool>,
}

impl std::str::FromStr for VariantFilter {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let mut filter = VariantFilter::default();
        for part in s.split('/').map(str::trim) {
            match part.to_lowercase().as_str() {
                "sequential" => filter.parallel = Some(false),
                "parallel" => filter.parallel = Some(true),
                other => {
                    let generator = other.parse::<GeneratorKind>().map_err(|_| {
                        CliError::InvalidArgument(format!(
                            "Unknown variant '{}'. Use a generator (xorshift64, std), \
                             a mode (sequential, parallel) or generator/mode",
                            s
                        ))
                    })?;
                    filter.generator = Some(generator);
                }
            }
        }
        Ok(filter)
    }
}

impl VariantFilter {
    /// Whether a variant satisfies every part of the filter
    pub fn matches(&self, config: &EstimatorConfig) -> bool {
        self.generator.map_or(true, |g| g == config.generator())
            && self
                .parallel
                .map_or(true, |p| p == config.mode().is_parallel())
    }
}

/// Timing summary for one variant
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    pub label: String,
    pub trials: u64,
    pub inside: u64,
    pub runs_ms: Vec<f64>,
    pub skipped_first: bool,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub std_dev_ms: f64,
}

impl BenchSummary {
    /// Summarise raw timings; the first is dropped from statistics when `skip_first`
    pub fn from_timings(
        label: String,
        trials: u64,
        inside: u64,
        timings: &[Duration],
        skip_first: bool,
    ) -> Self {
        let runs_ms: Vec<f64> = timings.iter().copied().map(as_millis_f64).collect();
        let measured = if skip_first && runs_ms.len() > 1 {
            &runs_ms[1..]
        } else {
            &runs_ms[..]
        };

        let n = measured.len().max(1) as f64;
        let mean_ms = measured.iter().sum::<f64>() / n;
        let min_ms = measured.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ms = measured.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = measured.iter().map(|t| (t - mean_ms).powi(2)).sum::<f64>() / n;

        Self {
            label,
            trials,
            inside,
            skipped_first: skip_first && runs_ms.len() > 1,
            runs_ms,
            mean_ms,
            min_ms,
            max_ms,
            std_dev_ms: variance.sqrt(),
        }
    }

    /// Number of runs that contribute to the statistics
    pub fn measured_runs(&self) -> usize {
        self.runs_ms.len() - usize::from(self.skipped_first)
    }
}

/// Check the option combination before doing any work
pub fn validate(options: &BenchOptions) -> Result<()> {
    if options.runs == 0 {
        return Err(CliError::InvalidArgument(
            "--runs must be at least 1".to_string(),
        ));
    }
    if options.skip_first && options.runs < 2 {
        return Err(CliError::InvalidArgument(
            "--skip-first requires --runs >= 2".to_string(),
        ));
    }
    Ok(())
}

/// Variants to time: the configured one, every generator/mode pair, or the
/// pairs matching any of `only`
pub fn variants(config: &CliConfig, all: bool, only: &[String]) -> Result<Vec<EstimatorConfig>> {
    let base = config.estimator.to_estimator_config()?;
    if !all && only.is_empty() {
        return Ok(vec![base]);
    }

    let filters = only
        .iter()
        .map(|f| f.parse::<VariantFilter>())
        .collect::<Result<Vec<_>>>()?;

    let parallel = ExecutionMode::Parallel {
        chunk_size: config.estimator.chunk_size,
    };
    let mut out = Vec::new();
    for generator in [GeneratorKind::Xorshift64, GeneratorKind::Std] {
        for mode in [ExecutionMode::Sequential, parallel] {
            let mut builder = EstimatorConfig::builder()
                .n_trials(base.n_trials())
                .seed(base.seed())
                .generator(generator)
                .mode(mode);
            if let Some(threads) = base.threads() {
                builder = builder.threads(threads);
            }
            let variant = builder.build()?;
            if filters.is_empty() || filters.iter().any(|f| f.matches(&variant)) {
                out.push(variant);
            }
        }
    }
    Ok(out)
}

fn label(config: &EstimatorConfig) -> String {
    format!("{}/{}", config.generator(), mode_label(config.mode()))
}

/// Time every variant and return summaries sorted by mean, fastest first
pub fn measure(config: &CliConfig, options: &BenchOptions) -> Result<Vec<BenchSummary>> {
    validate(options)?;

    let mut summaries = Vec::new();
    for variant in variants(config, options.all_variants, &options.only)? {
        let name = label(&variant);
        let estimator = Estimator::new(variant)?;
        info!(variant = %name, runs = options.runs, "Benchmarking");

        let mut timings = Vec::with_capacity(options.runs);
        let mut last = None;
        for run in 1..=options.runs {
            let start = Instant::now();
            let result = estimator.run();
            let elapsed = start.elapsed();
            debug!(variant = %name, run, elapsed_ms = as_millis_f64(elapsed), "Run finished");
            timings.push(elapsed);
            last = Some(result);
        }

        let result = last.ok_or_else(|| {
            CliError::InvalidArgument("--runs must be at least 1".to_string())
        })?;
        summaries.push(BenchSummary::from_timings(
            name,
            result.trials,
            result.inside,
            &timings,
            options.skip_first,
        ));
    }

    summaries.sort_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms));
    Ok(summaries)
}

/// Render summaries in the requested format
pub fn render(summaries: &[BenchSummary], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summaries)?);
    }

    let width = summaries
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0)
        .max("Variant".len());

    let mut out = String::new();
    out.push_str(&format!("{:<width$} {:<5} {}\n", "Variant", "Run", "Time (ms)"));
    out.push_str(&format!("{}\n", "-".repeat(width + 19)));
    for summary in summaries {
        for (i, ms) in summary.runs_ms.iter().enumerate() {
            let row = if summary.skipped_first && i == 0 {
                format!("{:<width$} {:<5} {:<12.3} (skipped)", summary.label, i + 1, ms)
            } else {
                format!("{:<width$} {:<5} {:.3}", summary.label, i + 1, ms)
            };
            out.push_str(&row);
            out.push('\n');
        }
    }

    if summaries.first().is_some_and(|s| s.measured_runs() > 1) {
        out.push_str(&format!("\n{}\n", "-".repeat(width + 19)));
        out.push_str(&format!(
            "{:<width$} {:<12} {:<12} {:<12} {:<12} {}\n",
            "Variant", "Mean (ms)", "Min (ms)", "Max (ms)", "Std (ms)", "Inside"
        ));
        for s in summaries {
            out.push_str(&format!(
                "{:<width$} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {}\n",
                s.label, s.mean_ms, s.min_ms, s.max_ms, s.std_dev_ms, s.inside
            ));
        }
    }

    Ok(out.trim_end().to_string())
}

/// Run the bench command
pub fn run(config: &CliConfig, options: &BenchOptions) -> Result<()> {
    let summaries = measure(config, options)?;
    println!("{}", render(&summaries, options.format)?);
    Ok(())
}
