//! Monte Carlo simulation of business scenarios.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── SimulationConfig   (trials, horizon, discount policy, seed)
//! ├── TrialKernel        (per-scenario constants, one path per call)
//! ├── TrialRng           (one seeded stream per trial)
//! └── Orchestration
//!     ├── run_trials()   (sequential or Rayon, order preserving)
//!     └── SimulationResult::from_outcomes()
//! ```
//!
//! # Reproducibility
//!
//! Trial `i` draws from `TrialRng::for_trial(seed, i)` and writes only slot `i`
//! of the output. The population is therefore bit-identical for a given seed
//! whether trials run sequentially, on the global Rayon pool, or on a pool of
//! any other size.
//!
//! # Examples
//!
//! ```rust
//! use decision_core::{Scenario, ScenarioParams};
//! use decision_engine::mc::{ExecutionMode, MonteCarloEngine, SimulationConfig};
//!
//! let scenario = Scenario::new(ScenarioParams {
//!     name: "Expansión Mercado Local".to_string(),
//!     initial_investment: 80_000.0,
//!     revenue_mean: 22_000.0,
//!     revenue_std: 5_000.0,
//!     cost_mean: 12_000.0,
//!     cost_std: 2_500.0,
//!     inflation_rate: 0.025,
//!     market_volatility: 0.12,
//! })
//! .unwrap();
//!
//! let sequential = MonteCarloEngine::new(
//!     SimulationConfig::builder()
//!         .n_trials(1_000)
//!         .execution(ExecutionMode::Sequential)
//!         .build()
//!         .unwrap(),
//! );
//! let parallel = MonteCarloEngine::new(
//!     SimulationConfig::builder()
//!         .n_trials(1_000)
//!         .execution(ExecutionMode::Parallel)
//!         .build()
//!         .unwrap(),
//! );
//!
//! assert_eq!(
//!     sequential.simulate(&scenario).unwrap().net_present_values(),
//!     parallel.simulate(&scenario).unwrap().net_present_values(),
//! );
//! ```

pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod trial;

// Re-exports for convenient access
pub use cancel::CancellationToken;
pub use config::{
    BreakEvenBasis, DiscountRate, ExecutionMode, SimulationConfig, SimulationConfigBuilder,
    BATCH_TRIALS, DEFAULT_HORIZON_MONTHS, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SEED,
    INTERACTIVE_TRIALS, MAX_HORIZON_MONTHS, MAX_TRIALS,
};
pub use engine::MonteCarloEngine;
pub use error::{ConfigError, EngineError};
pub use result::{
    Histogram, SimulationResult, LOWER_PERCENTILE, MAX_HISTOGRAM_BINS, UPPER_PERCENTILE,
};
pub use trial::TrialOutcome;
