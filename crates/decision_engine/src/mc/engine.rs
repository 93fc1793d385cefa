//! Monte Carlo engine orchestration.

use std::time::Instant;

use decision_core::Scenario;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::cancel::CancellationToken;
use super::config::{SimulationConfig, SimulationConfigBuilder};
use super::error::{ConfigError, EngineError};
use super::result::SimulationResult;
use super::trial::{TrialKernel, TrialOutcome};
use crate::rng::TrialRng;

/// Monte Carlo engine for business scenarios.
///
/// The engine owns only its immutable [`SimulationConfig`]; a single instance
/// can serve any number of scenarios, from any number of threads.
///
/// # Examples
///
/// ```rust
/// use decision_core::{Scenario, ScenarioParams};
/// use decision_engine::mc::{MonteCarloEngine, SimulationConfig};
///
/// let scenario = Scenario::new(ScenarioParams {
///     name: "Servicio Digital".to_string(),
///     initial_investment: 50_000.0,
///     revenue_mean: 18_000.0,
///     revenue_std: 4_000.0,
///     cost_mean: 8_000.0,
///     cost_std: 1_500.0,
///     inflation_rate: 0.02,
///     market_volatility: 0.25,
/// })
/// .unwrap();
///
/// let config = SimulationConfig::builder().n_trials(2_000).seed(42).build().unwrap();
/// let engine = MonteCarloEngine::new(config);
/// let result = engine.simulate(&scenario).unwrap();
///
/// assert_eq!(result.net_present_values().len(), 2_000);
/// assert!(result.percentile_5() <= result.percentile_95());
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates an engine from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Creates an engine running `n_trials` trials with default settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTrialCount` if `n_trials` is 0 or too large.
    pub fn with_trials(n_trials: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(
            SimulationConfigBuilder::default().n_trials(n_trials).build()?,
        ))
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every trial for `scenario` and returns the full population.
    ///
    /// Blocks until all trials complete.
    ///
    /// # Errors
    ///
    /// - `EngineError::DeadlineExceeded` when the configured time limit passes
    /// - `EngineError::ThreadPool` when a dedicated pool cannot be created
    pub fn simulate(&self, scenario: &Scenario) -> Result<SimulationResult, EngineError> {
        self.simulate_with_cancel(scenario, &CancellationToken::new())
    }

    /// Runs every trial for `scenario`, polling `cancel` before each trial.
    ///
    /// # Errors
    ///
    /// - `EngineError::Cancelled` once `cancel` is tripped
    /// - `EngineError::DeadlineExceeded` when the configured time limit passes
    /// - `EngineError::ThreadPool` when a dedicated pool cannot be created
    ///
    /// No partial result is returned in any of these cases.
    pub fn simulate_with_cancel(
        &self,
        scenario: &Scenario,
        cancel: &CancellationToken,
    ) -> Result<SimulationResult, EngineError> {
        let config = &self.config;
        let kernel = TrialKernel::new(scenario, config);
        let parallel = config.runs_in_parallel();

        debug!(
            scenario = scenario.name(),
            n_trials = config.n_trials(),
            horizon_months = config.horizon_months(),
            discount_rate = kernel.discount_rate(),
            seed = config.seed(),
            parallel,
            "Starting Monte Carlo simulation"
        );

        let started = Instant::now();
        let outcomes = match (parallel, config.thread_count()) {
            (true, Some(threads)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
                pool.install(|| self.run_trials(&kernel, cancel, started, true))
            }
            (parallel, _) => self.run_trials(&kernel, cancel, started, parallel),
        };

        let outcomes = match outcomes {
            Ok(outcomes) => outcomes,
            Err(err) => {
                warn!(scenario = scenario.name(), error = %err, "Simulation aborted");
                return Err(err);
            }
        };

        let result = SimulationResult::from_outcomes(
            scenario.name(),
            outcomes,
            config.seed(),
            config.horizon_months(),
        );

        info!(
            scenario = scenario.name(),
            n_trials = result.trial_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            percentile_5 = result.percentile_5(),
            percentile_95 = result.percentile_95(),
            "Simulation complete"
        );

        Ok(result)
    }

    /// Simulates each scenario in turn with the same configuration.
    ///
    /// # Errors
    ///
    /// Stops at the first scenario whose run fails.
    pub fn simulate_many(
        &self,
        scenarios: &[Scenario],
        cancel: &CancellationToken,
    ) -> Result<Vec<SimulationResult>, EngineError> {
        scenarios
            .iter()
            .map(|scenario| self.simulate_with_cancel(scenario, cancel))
            .collect()
    }

    /// Runs trials `0..n_trials`; slot `i` always holds trial `i`.
    fn run_trials(
        &self,
        kernel: &TrialKernel,
        cancel: &CancellationToken,
        started: Instant,
        parallel: bool,
    ) -> Result<Vec<TrialOutcome>, EngineError> {
        let base_seed = self.config.seed();
        let time_limit = self.config.time_limit();

        let run_trial = |index: usize| -> Result<TrialOutcome, EngineError> {
            if cancel.is_cancelled() {
                return Err(EngineError::Cancelled);
            }
            if let Some(limit) = time_limit {
                if started.elapsed() > limit {
                    return Err(EngineError::DeadlineExceeded { limit });
                }
            }
            let mut rng = TrialRng::for_trial(base_seed, index as u64);
            Ok(kernel.run(&mut rng))
        };

        let n_trials = self.config.n_trials();
        if parallel {
            (0..n_trials).into_par_iter().map(run_trial).collect()
        } else {
            (0..n_trials).map(run_trial).collect()
        }
    }
}
