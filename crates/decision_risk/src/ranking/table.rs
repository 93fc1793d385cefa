use std::cmp::Ordering;

use serde::Serialize;

use super::weights::ScoringWeights;
use crate::metrics::RiskMetrics;

/// One row of a [`ScenarioRanking`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedScenario {
    /// Scenario name.
    #[serde(rename = "escenario")]
    pub scenario_name: String,
    /// Attractiveness score.
    pub score_atractivo: f64,
    /// Risk metrics of the scenario.
    #[serde(flatten)]
    pub metrics: RiskMetrics,
}

/// Scenarios ordered from most to least attractive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScenarioRanking {
    rows: Vec<RankedScenario>,
}

impl ScenarioRanking {
    /// Scores and sorts named metrics.
    pub fn build(entries: Vec<(String, RiskMetrics)>, weights: &ScoringWeights) -> Self {
        let (lo, hi) = entries
            .iter()
            .map(|(_, m)| m.mean_npv)
            .filter(|x| x.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        let range = hi - lo;

        let mut rows: Vec<RankedScenario> = entries
            .into_iter()
            .map(|(scenario_name, metrics)| {
                let npv_norm = if range > 0.0 && range.is_finite() {
                    (metrics.mean_npv - lo) / range
                } else {
                    0.5
                };
                RankedScenario {
                    score_atractivo: weights.score(
                        metrics.success_probability,
                        npv_norm,
                        metrics.coefficient_of_variation,
                    ),
                    scenario_name,
                    metrics,
                }
            })
            .collect();

        rows.sort_by(rank_order);
        Self { rows }
    }

    /// Number of ranked scenarios.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when nothing was ranked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in rank order.
    #[inline]
    pub fn rows(&self) -> &[RankedScenario] {
        &self.rows
    }

    /// Iterates over rows in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedScenario> {
        self.rows.iter()
    }

    /// Most attractive scenario.
    pub fn best(&self) -> Option<&RankedScenario> {
        self.rows.first()
    }

    /// Finds a row by scenario name.
    pub fn get(&self, scenario_name: &str) -> Option<&RankedScenario> {
        self.rows.iter().find(|row| row.scenario_name == scenario_name)
    }

    /// Zero-based rank of a scenario.
    pub fn position(&self, scenario_name: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.scenario_name == scenario_name)
    }

    /// Consumes the ranking, returning its rows.
    pub fn into_rows(self) -> Vec<RankedScenario> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ScenarioRanking {
    type Item = &'a RankedScenario;
    type IntoIter = std::slice::Iter<'a, RankedScenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// NaN sorts below every number.
fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}

/// Descending score, then success probability, then mean NPV.
fn rank_order(a: &RankedScenario, b: &RankedScenario) -> Ordering {
    let desc = |x: f64, y: f64| sort_key(y).total_cmp(&sort_key(x));
    desc(a.score_atractivo, b.score_atractivo)
        .then_with(|| desc(a.metrics.success_probability, b.metrics.success_probability))
        .then_with(|| desc(a.metrics.mean_npv, b.metrics.mean_npv))
}
