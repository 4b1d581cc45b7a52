//! Result rendering for stdout
//!
//! Logs go to stderr; everything here is the command's actual output.

use std::str::FromStr;
use std::time::Duration;

use pi_estimator::mc::{EstimateResult, ExecutionMode};
use serde::Serialize;

use crate::{CliError, Result};

/// Output formats accepted by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Human-readable execution mode label
pub fn mode_label(mode: ExecutionMode) -> String {
    match mode {
        ExecutionMode::Sequential => "sequential".to_string(),
        ExecutionMode::Parallel { chunk_size } => format!("parallel (chunk {})", chunk_size),
    }
}

/// Milliseconds as a float
pub fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

/// One estimator run with derived statistics
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub result: EstimateResult,
    pub pi_estimate: f64,
    pub std_error: f64,
    pub confidence_95: f64,
    pub abs_error: f64,
    pub elapsed_ms: f64,
}

impl RunReport {
    pub fn new(result: EstimateResult, elapsed: Duration) -> Self {
        Self {
            result,
            pi_estimate: result.pi_estimate(),
            std_error: result.std_error(),
            confidence_95: result.confidence_95(),
            abs_error: result.abs_error(),
            elapsed_ms: as_millis_f64(elapsed),
        }
    }
}

/// Render a run report in the requested format
pub fn render_run(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let r = &report.result;
            let rows = [
                ("Trials", r.trials.to_string()),
                ("Inside", r.inside.to_string()),
                ("Seed", r.seed.to_string()),
                ("Generator", r.generator.to_string()),
                ("Mode", mode_label(r.mode)),
                ("Pi estimate", format!("{:.6}", report.pi_estimate)),
                ("95% CI", format!("+/- {:.6}", report.confidence_95)),
                ("Abs error", format!("{:.6}", report.abs_error)),
                ("Elapsed", format!("{:.3} ms", report.elapsed_ms)),
            ];

            let value_width = rows
                .iter()
                .map(|(_, v)| v.chars().count())
                .max()
                .unwrap_or(0)
                .max(12);
            let bar = "─".repeat(value_width + 2);

            let mut out = String::new();
            out.push_str(&format!("┌─────────────┬{}┐\n", bar));
            for (name, value) in rows.iter() {
                out.push_str(&format!("│ {:<11} │ {:<w$} │\n", name, value, w = value_width));
            }
            out.push_str(&format!("└─────────────┴{}┘", bar));
            Ok(out)
        }
    }
}
