//! Statistics calculator.
//!
//! [`StatisticsCalculator`] is the entry point of this crate: it derives
//! [`RiskMetrics`] from one simulation and ranks several simulations against
//! each other. It holds only its scoring weights and never mutates its
//! inputs, so one instance can be shared freely.

use decision_engine::mc::SimulationResult;

use crate::metrics::RiskMetrics;
use crate::ranking::{ScenarioRanking, ScoringWeights};

/// Computes risk metrics and scenario rankings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatisticsCalculator {
    weights: ScoringWeights,
}

impl StatisticsCalculator {
    /// Creates a calculator with the default scoring weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom scoring weights.
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Returns the scoring weights.
    #[inline]
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Computes the risk metrics of one simulation.
    pub fn risk_metrics(&self, result: &SimulationResult) -> RiskMetrics {
        RiskMetrics::from_result(result)
    }

    /// Ranks simulations by attractiveness.
    ///
    /// Mean NPV is min–max normalised across `results`, so adding or removing
    /// a scenario can change the scores of the others.
    pub fn compare_scenarios(&self, results: &[SimulationResult]) -> ScenarioRanking {
        let entries = results
            .iter()
            .map(|result| (result.scenario_name().to_string(), self.risk_metrics(result)))
            .collect();
        ScenarioRanking::build(entries, &self.weights)
    }
}
