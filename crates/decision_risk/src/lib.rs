//! # Decision Risk (L3: Analytics)
//!
//! Turns simulated NPV populations into risk metrics and ranks competing
//! scenarios by attractiveness.
//!
//! This crate provides:
//! - [`RiskMetrics`]: the thirteen named metrics of one simulation
//! - [`StatisticsCalculator`]: pure metric and ranking computations
//! - [`ScoringWeights`] and [`ScenarioRanking`]: the attractiveness policy and
//!   its ordered output
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           decision_risk (L3)            │
//! ├─────────────────────────────────────────┤
//! │  metrics/  - RiskMetrics, metric keys   │
//! │  ranking/  - weights, ranked table      │
//! │  calculator - StatisticsCalculator      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          decision_engine (L2)           │
//! │  Monte Carlo engine, SimulationResult   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use decision_core::{Scenario, ScenarioParams};
//! use decision_engine::mc::{MonteCarloEngine, SimulationConfig};
//! use decision_risk::StatisticsCalculator;
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
//! let engine = MonteCarloEngine::new(SimulationConfig::builder().n_trials(2_000).build().unwrap());
//! let result = engine.simulate(&scenario).unwrap();
//!
//! let metrics = StatisticsCalculator::new().risk_metrics(&result);
//! assert!(metrics.cvar_95 >= metrics.var_95);
//! assert_eq!(metrics.get("media_npv"), Some(metrics.mean_npv));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calculator;
pub mod error;
pub mod metrics;
pub mod ranking;

pub use calculator::StatisticsCalculator;
pub use error::RiskError;
pub use metrics::{RiskMetrics, METRIC_KEYS, PROBABILITY_KEYS};
pub use ranking::{RankedScenario, ScenarioRanking, ScoringWeights};
