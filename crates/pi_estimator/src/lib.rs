//! # Pi Estimator (Layer P: The Kernel)
//!
//! Monte Carlo estimation of π by sampling the unit square and counting the
//! points that fall inside the unit quarter-circle.
//!
//! ## Layer Role
//!
//! - Seeded, reproducible generators ([`rng`])
//! - Trial counting and estimate statistics ([`mc`])
//! - Optional Rayon-parallel driver with independent sub-streams
//!
//! The crate performs no I/O and no logging; the service layer owns both.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_estimator::mc::{EstimatorConfig, Estimator};
//!
//! let config = EstimatorConfig::builder()
//!     .n_trials(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = Estimator::new(config).unwrap().run();
//! assert!(result.inside <= result.trials);
//! assert!((result.pi_estimate() - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! ## Reference Stream
//!
//! The default generator is Xorshift64 seeded directly with the seed value.
//! With seed 42 and 10,000,000 trials the sequential count is 7,853,478.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo estimator, configuration and parallel driver
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{
    count_inside, is_inside, ConfigError, EstimateResult, Estimator, EstimatorConfig,
    ExecutionMode,
};
pub use rng::{GeneratorKind, StdUniformRng, UniformSource, Xorshift64};
