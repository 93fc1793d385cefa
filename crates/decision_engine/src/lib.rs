//! # decision_engine (Layer 2: Simulation Engine)
//!
//! Monte Carlo engine that turns a validated
//! [`Scenario`](decision_core::Scenario) into a population of simulated trial
//! outcomes (NPV, ROI, break-even month).
//!
//! ## Layer Integration
//!
//! - Layer 1 (decision_core): scenario model, percentile routine
//! - Layer 3 (decision_risk): consumes [`SimulationResult`]
//!
//! ## Usage Example
//!
//! ```rust
//! use decision_core::{Scenario, ScenarioParams};
//! use decision_engine::{MonteCarloEngine, SimulationConfigBuilder};
//!
//! let scenario = Scenario::new(ScenarioParams {
//!     name: "Lanzamiento Producto Premium".to_string(),
//!     initial_investment: 150_000.0,
//!     revenue_mean: 35_000.0,
//!     revenue_std: 8_000.0,
//!     cost_mean: 20_000.0,
//!     cost_std: 4_000.0,
//!     inflation_rate: 0.03,
//!     market_volatility: 0.20,
//! })
//! .unwrap();
//!
//! let engine = MonteCarloEngine::new(SimulationConfigBuilder::batch().seed(42).build().unwrap());
//! let result = engine.simulate(&scenario).unwrap();
//! assert_eq!(result.trial_count(), 10_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Per-trial random number generation
pub mod rng;

// Monte Carlo engine
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{
    CancellationToken, ConfigError, EngineError, MonteCarloEngine, SimulationConfig,
    SimulationConfigBuilder, SimulationResult, TrialOutcome,
};
