//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Estimator configuration error: {0}")]
    Estimator(#[from] pi_estimator::ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::FileNotFound("montepi.toml".to_string());
        assert_eq!(err.to_string(), "File not found: montepi.toml");

        let err: CliError = pi_estimator::ConfigError::InvalidChunkSize(0).into();
        assert!(err.to_string().contains("Invalid chunk size 0"));

        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().contains("loud"));
    }
}
