//! Error types for estimator configuration.
//!
//! The counting loop itself cannot fail; errors arise only when a
//! configuration is validated or its thread pool is built.

use thiserror::Error;

use super::config::MAX_TRIALS;

/// Configuration error for the estimator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Trial count above [`MAX_TRIALS`].
    #[error("Invalid trial count {0}: must be in range [0, {max}]", max = MAX_TRIALS)]
    InvalidTrialCount(u64),

    /// Parallel chunk size of zero.
    #[error("Invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(u64),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The dedicated Rayon pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}
