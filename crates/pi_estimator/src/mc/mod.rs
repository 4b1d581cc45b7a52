//! Monte Carlo estimation of π.
//!
//! # Architecture
//!
//! ```text
//! Estimator
//! ├── EstimatorConfig   (trials, seed, generator, execution mode)
//! ├── UniformSource     (Xorshift64 | StdUniformRng)
//! └── Orchestration
//!     ├── count_inside()           sequential reference loop
//!     └── count_inside_parallel()  chunked sub-streams on Rayon
//! ```
//!
//! # Reference Run
//!
//! ```rust
//! use pi_estimator::mc::{Estimator, EstimatorConfig};
//!
//! let config = EstimatorConfig::builder()
//!     .n_trials(100_000)
//!     .build()
//!     .unwrap();
//!
//! let result = Estimator::new(config).unwrap().run();
//! assert_eq!(result.inside, 78_305);
//! println!("Pi: {:.5} +/- {:.5}", result.pi_estimate(), result.confidence_95());
//! ```
//!
//! # Parallel Run
//!
//! ```rust
//! use pi_estimator::mc::{Estimator, EstimatorConfig, ExecutionMode};
//!
//! let config = EstimatorConfig::builder()
//!     .n_trials(1_000_000)
//!     .mode(ExecutionMode::parallel())
//!     .build()
//!     .unwrap();
//!
//! let result = Estimator::new(config).unwrap().run();
//! assert!(result.abs_error() < 0.01);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod parallel;
pub mod trial;

// Re-exports for convenient access
pub use config::{
    EstimatorConfig, EstimatorConfigBuilder, ExecutionMode, DEFAULT_CHUNK_SIZE, DEFAULT_SEED,
    DEFAULT_TRIALS, MAX_TRIALS,
};
pub use error::ConfigError;
pub use estimator::{EstimateResult, Estimator};
pub use parallel::count_inside_parallel;
pub use trial::{count_inside, is_inside};
