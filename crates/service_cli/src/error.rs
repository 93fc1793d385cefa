//! Error types for the CLI.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Simulation settings rejected by the engine
    #[error("Simulation settings error: {0}")]
    Simulation(#[from] decision_engine::ConfigError),

    /// Scenario parameters rejected
    #[error("Invalid scenario: {0}")]
    Validation(#[from] decision_core::ValidationError),

    /// Simulation run aborted
    #[error("Simulation failed: {0}")]
    Engine(#[from] decision_engine::EngineError),

    /// Scoring weights rejected
    #[error("Scoring error: {0}")]
    Risk(#[from] decision_risk::RiskError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine self-test did not reproduce its own results
    #[error("Engine self-test failed: {0}")]
    SelfTest(String),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidArgument("Unknown format: xml".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Unknown format: xml");

        let err: CliError = decision_engine::ConfigError::InvalidTrialCount(0).into();
        assert!(err.to_string().contains("Invalid trial count 0"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CliError = decision_core::ValidationError::EmptyName.into();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
