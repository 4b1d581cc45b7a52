//! The estimator and its result type.

use std::f64::consts::PI;

use crate::rng::{GeneratorKind, StdUniformRng, Xorshift64};

use super::config::{EstimatorConfig, ExecutionMode};
use super::error::ConfigError;
use super::parallel;
use super::trial::count_inside;

/// Outcome of one estimator run.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::mc::EstimateResult;
///
/// let result = EstimateResult {
///     trials: 1_000,
///     inside: 785,
///     ..EstimateResult::empty()
/// };
/// assert!((result.pi_estimate() - 3.14).abs() < 1e-12);
/// println!("pi = {:.4} +/- {:.4}", result.pi_estimate(), result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateResult {
    /// Number of trials run.
    pub trials: u64,
    /// Number of trials inside the quarter-circle.
    pub inside: u64,
    /// Seed of the generator (base seed in parallel mode).
    pub seed: u64,
    /// Generator that produced the draws.
    pub generator: GeneratorKind,
    /// How the trials were scheduled.
    pub mode: ExecutionMode,
}

impl EstimateResult {
    /// A zero-trial result with default metadata.
    pub fn empty() -> Self {
        Self {
            trials: 0,
            inside: 0,
            seed: 0,
            generator: GeneratorKind::default(),
            mode: ExecutionMode::default(),
        }
    }

    /// Returns `true` when no trials were run.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trials == 0
    }

    /// Fraction of trials inside, or 0.0 for an empty run.
    #[inline]
    pub fn fraction_inside(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.inside as f64 / self.trials as f64
        }
    }

    /// Estimate of π, four times the inside fraction.
    #[inline]
    pub fn pi_estimate(&self) -> f64 {
        4.0 * self.fraction_inside()
    }

    /// Standard error of [`pi_estimate`](Self::pi_estimate).
    ///
    /// Each trial is a Bernoulli draw with success probability `p`, so the
    /// error is `4 * sqrt(p (1 - p) / n)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let p = self.fraction_inside();
        4.0 * (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error()
    }

    /// Absolute distance between the estimate and π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.pi_estimate() - PI).abs()
    }
}

/// Monte Carlo π estimator.
///
/// Owns a validated configuration and, when a thread count was requested for
/// parallel mode, a dedicated Rayon pool. Every call to [`run`](Self::run)
/// creates fresh generators, so repeated runs give identical results.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::mc::{Estimator, EstimatorConfig};
///
/// let config = EstimatorConfig::builder().n_trials(10_000).build().unwrap();
/// let estimator = Estimator::new(config).unwrap();
/// let first = estimator.run();
/// assert_eq!(first, estimator.run());
/// ```
#[derive(Debug)]
pub struct Estimator {
    config: EstimatorConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Estimator {
    /// Creates an estimator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid or the
    /// dedicated thread pool cannot be created.
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = match (config.mode(), config.threads()) {
            (ExecutionMode::Parallel { .. }, Some(threads)) => Some(
                parallel::build_pool(threads)
                    .map_err(|e| ConfigError::ThreadPool(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self { config, pool })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Counts inside trials and returns the result.
    pub fn run(&self) -> EstimateResult {
        let config = &self.config;
        let inside = match config.mode() {
            ExecutionMode::Sequential => match config.generator() {
                GeneratorKind::Xorshift64 => {
                    count_inside(&mut Xorshift64::from_seed(config.seed()), config.n_trials())
                }
                GeneratorKind::Std => count_inside(
                    &mut StdUniformRng::from_seed(config.seed()),
                    config.n_trials(),
                ),
            },
            ExecutionMode::Parallel { chunk_size } => parallel::count_inside_parallel(
                config.generator(),
                config.seed(),
                config.n_trials(),
                chunk_size,
                self.pool.as_ref(),
            ),
        };

        EstimateResult {
            trials: config.n_trials(),
            inside,
            seed: config.seed(),
            generator: config.generator(),
            mode: config.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(trials: u64, inside: u64) -> EstimateResult {
        EstimateResult {
            trials,
            inside,
            ..EstimateResult::empty()
        }
    }

    #[test]
    fn test_empty_result_statistics() {
        let r = EstimateResult::empty();
        assert!(r.is_empty());
        assert_eq!(r.fraction_inside(), 0.0);
        assert_eq!(r.pi_estimate(), 0.0);
        assert_eq!(r.std_error(), 0.0);
        assert!(!r.pi_estimate().is_nan());
    }

    #[test]
    fn test_result_statistics() {
        let r = result(1_000, 750);
        assert_relative_eq!(r.fraction_inside(), 0.75);
        assert_relative_eq!(r.pi_estimate(), 3.0);
        let expected_se = 4.0 * (0.75f64 * 0.25 / 1_000.0).sqrt();
        assert_relative_eq!(r.std_error(), expected_se);
        assert_relative_eq!(r.confidence_95(), 1.96 * expected_se);
        assert_relative_eq!(r.abs_error(), PI - 3.0);
    }

    #[test]
    fn test_all_inside_has_zero_std_error() {
        let r = result(10, 10);
        assert_relative_eq!(r.pi_estimate(), 4.0);
        assert_eq!(r.std_error(), 0.0);
    }

    #[test]
    fn test_estimator_small_reference_run() {
        let config = EstimatorConfig::builder().n_trials(1_000).build().unwrap();
        let r = Estimator::new(config).unwrap().run();
        assert_eq!(r.trials, 1_000);
        assert_eq!(r.inside, 803);
        assert_eq!(r.seed, 42);
        assert_eq!(r.generator, GeneratorKind::Xorshift64);
        assert_eq!(r.mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_estimator_zero_trials() {
        let config = EstimatorConfig::builder().n_trials(0).build().unwrap();
        let r = Estimator::new(config).unwrap().run();
        assert_eq!(r.inside, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_estimator_rejects_invalid_config() {
        let config = EstimatorConfig::builder().threads(0).build();
        assert!(config.is_err());
    }

    #[test]
    fn test_threads_ignored_in_sequential_mode() {
        let config = EstimatorConfig::builder()
            .n_trials(100)
            .threads(2)
            .build()
            .unwrap();
        let estimator = Estimator::new(config).unwrap();
        assert!(estimator.pool.is_none());
    }

    #[test]
    fn test_parallel_with_dedicated_pool() {
        let config = EstimatorConfig::builder()
            .n_trials(200_000)
            .mode(ExecutionMode::Parallel { chunk_size: 10_000 })
            .threads(3)
            .build()
            .unwrap();
        let estimator = Estimator::new(config).unwrap();
        assert!(estimator.pool.is_some());

        let r = estimator.run();
        assert_eq!(r, estimator.run());
        assert!(r.abs_error() < 5.0 * r.std_error());
    }
}
