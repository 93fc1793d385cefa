//! # decision_core: Foundation for Monte Carlo Business Decisions
//!
//! ## Layer 1 (Foundation) Role
//!
//! decision_core is the bottom layer of the workspace, providing:
//! - The validated scenario model (`scenario`)
//! - Error types: `ValidationError` (`types::error`)
//! - Order statistics and moment estimators (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other decision_* crates, with minimal external
//! dependencies:
//! - thiserror: Error derives
//! - serde: Serialisation of scenarios
//!
//! ## Usage Examples
//!
//! ```rust
//! use decision_core::math::statistics::{mean, percentile_of};
//! use decision_core::scenario::{Scenario, ScenarioParams};
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
//! assert_eq!(scenario.name(), "Lanzamiento Producto Premium");
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&values), 2.5);
//! assert_eq!(percentile_of(&values, 50.0), 2.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod scenario;
pub mod types;

pub use scenario::{Scenario, ScenarioParams};
pub use types::ValidationError;
