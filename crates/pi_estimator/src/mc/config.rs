//! Estimator configuration.
//!
//! This module provides the immutable [`EstimatorConfig`] and its builder.
//! Every field has a default, so `EstimatorConfig::default()` reproduces the
//! reference run: 10,000,000 sequential trials of Xorshift64 seeded with 42.

use crate::rng::GeneratorKind;

use super::error::ConfigError;

/// Default number of trials.
pub const DEFAULT_TRIALS: u64 = 10_000_000;

/// Default generator seed.
pub const DEFAULT_SEED: u64 = 42;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: u64 = 1_000_000_000_000;

/// Default number of trials per parallel chunk.
pub const DEFAULT_CHUNK_SIZE: u64 = 1 << 20;

/// How trials are scheduled.
///
/// The sequential mode consumes one stream in order and is the reference
/// contract. The parallel mode splits the trials into fixed-size chunks, each
/// with its own derived seed, so its count depends on `chunk_size` but not on
/// the number of worker threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// One generator, trials drawn in order.
    #[default]
    Sequential,
    /// Chunked sub-streams counted on the Rayon pool.
    Parallel {
        /// Trials per chunk.
        chunk_size: u64,
    },
}

impl ExecutionMode {
    /// Parallel mode with [`DEFAULT_CHUNK_SIZE`].
    #[inline]
    pub fn parallel() -> Self {
        ExecutionMode::Parallel {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Returns `true` for the parallel mode.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel { .. })
    }
}

/// Monte Carlo estimator configuration.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::mc::{EstimatorConfig, ExecutionMode};
/// use pi_estimator::rng::GeneratorKind;
///
/// let config = EstimatorConfig::builder()
///     .n_trials(1_000_000)
///     .seed(7)
///     .generator(GeneratorKind::Std)
///     .mode(ExecutionMode::parallel())
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 1_000_000);
/// assert!(config.mode().is_parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    n_trials: u64,
    seed: u64,
    generator: GeneratorKind,
    mode: ExecutionMode,
    /// Worker threads for a dedicated pool; `None` uses the global pool.
    threads: Option<usize>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            n_trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            generator: GeneratorKind::default(),
            mode: ExecutionMode::default(),
            threads: None,
        }
    }
}

impl EstimatorConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> u64 {
        self.n_trials
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the generator kind.
    #[inline]
    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }

    /// Returns the execution mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Returns the dedicated pool size, if any.
    #[inline]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_trials` is greater than [`MAX_TRIALS`]
    /// - the parallel `chunk_size` is 0
    /// - `threads` is `Some(0)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        if let ExecutionMode::Parallel { chunk_size: 0 } = self.mode {
            return Err(ConfigError::InvalidChunkSize(0));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "threads",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`EstimatorConfig`].
///
/// Unset fields keep their defaults; validation happens in [`build`].
///
/// [`build`]: EstimatorConfigBuilder::build
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    config: EstimatorConfig,
}

impl EstimatorConfigBuilder {
    /// Sets the number of trials.
    #[inline]
    pub fn n_trials(mut self, n_trials: u64) -> Self {
        self.config.n_trials = n_trials;
        self
    }

    /// Sets the generator seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the generator kind.
    #[inline]
    pub fn generator(mut self, generator: GeneratorKind) -> Self {
        self.config.generator = generator;
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Requests a dedicated Rayon pool with this many threads.
    ///
    /// Only consulted in parallel mode.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when [`EstimatorConfig::validate`] fails.
    pub fn build(self) -> Result<EstimatorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
