//! CLI configuration management
//!
//! Loads settings from a TOML file and merges command line overrides on top.
//! Environment variables reach this module through clap (`MONTEPI_*`), so a
//! flag always beats its variable, which beats the file, which beats the
//! built-in defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pi_estimator::mc::{
    EstimatorConfig, ExecutionMode, DEFAULT_CHUNK_SIZE, DEFAULT_SEED, DEFAULT_TRIALS,
};
use pi_estimator::rng::GeneratorKind;
use serde::Deserialize;
use thiserror::Error;

/// Config file read when `--config` is not given and the file exists
pub const DEFAULT_CONFIG_FILE: &str = "montepi.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error(transparent)]
    InvalidGenerator(#[from] pi_estimator::rng::UnknownGenerator),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[estimator]` table of the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorSection {
    /// Number of trials
    pub trials: u64,
    /// Generator seed
    pub seed: u64,
    /// Generator name
    #[serde(deserialize_with = "deserialize_generator")]
    pub generator: GeneratorKind,
    /// Use the chunked parallel driver
    pub parallel: bool,
    /// Trials per parallel chunk
    pub chunk_size: u64,
    /// Dedicated worker thread count
    pub threads: Option<usize>,
}

impl Default for EstimatorSection {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            generator: GeneratorKind::default(),
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
        }
    }
}

impl EstimatorSection {
    /// Build the validated kernel configuration
    pub fn to_estimator_config(&self) -> Result<EstimatorConfig, pi_estimator::ConfigError> {
        let mode = if self.parallel {
            ExecutionMode::Parallel {
                chunk_size: self.chunk_size,
            }
        } else {
            ExecutionMode::Sequential
        };

        let mut builder = EstimatorConfig::builder()
            .n_trials(self.trials)
            .seed(self.seed)
            .generator(self.generator)
            .mode(mode);
        if let Some(threads) = self.threads {
            builder = builder.threads(threads);
        }
        builder.build()
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Estimator settings
    pub estimator: EstimatorSection,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_generator<'de, D>(deserializer: D) -> Result<GeneratorKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    GeneratorKind::from_str(&s).map_err(serde::de::Error::custom)
}

/// Command line overrides, all optional
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug
    pub verbose: bool,
    /// Trial count override
    pub trials: Option<u64>,
    /// Seed override
    pub seed: Option<u64>,
    /// Generator override
    pub generator: Option<String>,
    /// Force the parallel driver
    pub parallel: bool,
    /// Chunk size override
    pub chunk_size: Option<u64>,
    /// Thread count override
    pub threads: Option<usize>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }

        let estimator = &mut self.estimator;
        if let Some(trials) = cli.trials {
            estimator.trials = trials;
        }
        if let Some(seed) = cli.seed {
            estimator.seed = seed;
        }
        if let Some(generator) = &cli.generator {
            estimator.generator = GeneratorKind::from_str(generator)?;
        }
        if cli.parallel {
            estimator.parallel = true;
        }
        if let Some(chunk_size) = cli.chunk_size {
            estimator.chunk_size = chunk_size;
        }
        if let Some(threads) = cli.threads {
            estimator.threads = Some(threads);
        }
        Ok(())
    }
}

/// Resolve which config file to read, if any
///
/// An explicitly named file must exist; the default file is optional.
pub fn resolve_config_path(explicit: Option<&Path>) -> crate::Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(crate::CliError::FileNotFound(path.display().to_string())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            Ok(default.exists().then(|| default.to_path_buf()))
        }
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments (including `MONTEPI_*` environment variables)
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliOverrides) -> crate::Result<CliConfig> {
    let mut config = match resolve_config_path(cli.config_file.as_deref())? {
        Some(path) => CliConfig::from_file(&path)?,
        None => CliConfig::default(),
    };

    config.merge_with_cli(cli)?;

    // Surface kernel validation errors before any work starts
    config.estimator.to_estimator_config()?;

    Ok(config)
}
