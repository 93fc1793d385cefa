//! Monte Carlo simulation configuration.
//!
//! This module provides the immutable engine configuration and its builder.
//! The engine holds nothing else: there is no process-wide state.

use std::time::Duration;

use decision_core::Scenario;

use super::error::ConfigError;
use crate::rng::entropy_seed;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Maximum horizon in months (100 years).
pub const MAX_HORIZON_MONTHS: usize = 1_200;

/// Default simulation horizon in months.
pub const DEFAULT_HORIZON_MONTHS: usize = 36;

/// Default base seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 42;

/// Trial count for interactive use (dashboards, single scenario runs).
pub const INTERACTIVE_TRIALS: usize = 5_000;

/// Trial count for batch and demo runs.
pub const BATCH_TRIALS: usize = 10_000;

/// Minimum trial count before [`ExecutionMode::Auto`] switches to Rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// Source of the monthly discount rate applied to net cash flows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DiscountRate {
    /// Discount at the scenario's own `inflation_rate`.
    #[default]
    Inflation,
    /// Discount at a fixed monthly rate, identical for every scenario.
    Monthly(f64),
}

impl DiscountRate {
    /// Returns the monthly rate to use for `scenario`.
    #[inline]
    pub fn resolve(&self, scenario: &Scenario) -> f64 {
        match *self {
            Self::Inflation => scenario.inflation_rate(),
            Self::Monthly(rate) => rate,
        }
    }
}

/// Cash-flow series on which the break-even month is detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BreakEvenBasis {
    /// First month where the cumulative undiscounted cash flow is non-negative.
    #[default]
    Undiscounted,
    /// First month where the running discounted NPV is non-negative.
    Discounted,
}

/// Scheduling of trials across threads.
///
/// Every mode yields bit-identical results for the same seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Parallel when the trial count reaches the parallel threshold.
    #[default]
    Auto,
    /// Always run trials on the calling thread.
    Sequential,
    /// Always distribute trials with Rayon.
    Parallel,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use decision_engine::mc::{SimulationConfig, DEFAULT_HORIZON_MONTHS};
///
/// let config = SimulationConfig::builder()
///     .n_trials(10_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.horizon_months(), DEFAULT_HORIZON_MONTHS);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    n_trials: usize,
    horizon_months: usize,
    discount_rate: DiscountRate,
    break_even_basis: BreakEvenBasis,
    seed: u64,
    execution: ExecutionMode,
    parallel_threshold: usize,
    thread_count: Option<usize>,
    time_limit: Option<Duration>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the simulation horizon in months.
    #[inline]
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Returns the discount rate policy.
    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        self.discount_rate
    }

    /// Returns the break-even detection basis.
    #[inline]
    pub fn break_even_basis(&self) -> BreakEvenBasis {
        self.break_even_basis
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Returns the trial count from which `Auto` mode runs in parallel.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns the dedicated worker count, if any.
    #[inline]
    pub fn thread_count(&self) -> Option<usize> {
        self.thread_count
    }

    /// Returns the wall-clock limit for one `simulate` call, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Returns whether trials are distributed across threads.
    #[inline]
    pub fn runs_in_parallel(&self) -> bool {
        match self.execution {
            ExecutionMode::Auto => self.n_trials >= self.parallel_threshold,
            ExecutionMode::Sequential => false,
            ExecutionMode::Parallel => true,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_trials` is 0 or greater than 10,000,000
    /// - `horizon_months` is 0 or greater than 1,200
    /// - a fixed discount rate is not finite or not greater than -1
    /// - `thread_count` is `Some(0)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(ConfigError::InvalidHorizon(self.horizon_months));
        }
        if let DiscountRate::Monthly(rate) = self.discount_rate {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ConfigError::InvalidDiscountRate(rate));
            }
        }
        if self.thread_count == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "thread_count",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use decision_engine::mc::{DiscountRate, SimulationConfigBuilder};
///
/// let config = SimulationConfigBuilder::interactive()
///     .horizon_months(24)
///     .discount_rate(DiscountRate::Monthly(0.01))
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.n_trials(), 5_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_trials: Option<usize>,
    horizon_months: Option<usize>,
    discount_rate: DiscountRate,
    break_even_basis: BreakEvenBasis,
    seed: Option<u64>,
    execution: ExecutionMode,
    parallel_threshold: Option<usize>,
    thread_count: Option<usize>,
    time_limit: Option<Duration>,
}

impl SimulationConfigBuilder {
    /// Builder preset with [`INTERACTIVE_TRIALS`] trials.
    pub fn interactive() -> Self {
        Self::default().n_trials(INTERACTIVE_TRIALS)
    }

    /// Builder preset with [`BATCH_TRIALS`] trials.
    pub fn batch() -> Self {
        Self::default().n_trials(BATCH_TRIALS)
    }

    /// Sets the number of trials.
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the horizon in months (default 36).
    #[inline]
    pub fn horizon_months(mut self, horizon_months: usize) -> Self {
        self.horizon_months = Some(horizon_months);
        self
    }

    /// Sets the discount rate policy.
    #[inline]
    pub fn discount_rate(mut self, discount_rate: DiscountRate) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Sets the break-even basis.
    #[inline]
    pub fn break_even_basis(mut self, basis: BreakEvenBasis) -> Self {
        self.break_even_basis = basis;
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws the base seed from operating-system entropy.
    pub fn seed_from_entropy(mut self) -> Self {
        self.seed = Some(entropy_seed());
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Sets the trial count from which `Auto` mode runs in parallel.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Runs parallel simulations on a dedicated pool of `threads` workers
    /// instead of the global Rayon pool.
    #[inline]
    pub fn thread_count(mut self, threads: usize) -> Self {
        self.thread_count = Some(threads);
        self
    }

    /// Aborts a `simulate` call that runs longer than `limit`.
    #[inline]
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_trials` is not set or any parameter is
    /// invalid (see [`SimulationConfig::validate`]).
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_trials = self.n_trials.ok_or(ConfigError::InvalidParameter {
            name: "n_trials",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_trials,
            horizon_months: self.horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS),
            discount_rate: self.discount_rate,
            break_even_basis: self.break_even_basis,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            execution: self.execution,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            thread_count: self.thread_count,
            time_limit: self.time_limit,
        };

        config.validate()?;
        Ok(config)
    }
}
