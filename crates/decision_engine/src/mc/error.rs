//! Error types for the Monte Carlo engine.
//!
//! [`ConfigError`] is raised while building a [`SimulationConfig`](super::SimulationConfig),
//! before any sampling happens. [`EngineError`] is returned by `simulate` and
//! only carries failures of the cooperative cancellation hook; the trial loop
//! itself is pure arithmetic over a validated scenario and cannot fail.

use std::time::Duration;
use thiserror::Error;

/// Configuration error for the Monte Carlo engine.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Trial count outside valid range [1, 10_000_000].
    #[error("Invalid trial count {0}: must be in range [1, 10_000_000]")]
    InvalidTrialCount(usize),

    /// Horizon outside valid range [1, 1_200] months.
    #[error("Invalid horizon {0} months: must be in range [1, 1_200]")]
    InvalidHorizon(usize),

    /// Discount rate not finite or not greater than -1.
    #[error("Invalid monthly discount rate {0}: must be finite and greater than -1")]
    InvalidDiscountRate(f64),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Error returned by a simulation run.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Engine configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The run was cancelled through its [`CancellationToken`](super::CancellationToken).
    #[error("Simulation cancelled")]
    Cancelled,

    /// The run exceeded its configured time limit.
    #[error("Simulation exceeded time limit of {limit:?}")]
    DeadlineExceeded {
        /// Configured limit.
        limit: Duration,
    },

    /// A dedicated worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}
