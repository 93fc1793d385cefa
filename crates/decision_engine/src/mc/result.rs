//! Simulation result container.

use decision_core::math::statistics::{percentile, sorted};
use serde::Serialize;

use super::trial::TrialOutcome;

/// Lower convenience percentile level (percent).
pub const LOWER_PERCENTILE: f64 = 5.0;

/// Upper convenience percentile level (percent).
pub const UPPER_PERCENTILE: f64 = 95.0;

/// Largest bucket count [`SimulationResult::histogram`] will allocate.
pub const MAX_HISTOGRAM_BINS: usize = 1_000;

/// Immutable population of trial outcomes for one scenario.
///
/// Outcomes are stored column-wise; index `i` in every vector belongs to
/// trial `i`. The 5th and 95th NPV percentiles are computed once at
/// construction with the same interpolation rule as
/// [`decision_core::math::statistics::percentile`].
///
/// The serialised form keeps the keys `net_present_values`, `percentile_5`
/// and `percentile_95` expected by reporting consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    scenario_name: String,
    net_present_values: Vec<f64>,
    roi_values: Vec<f64>,
    break_even_months: Vec<Option<u32>>,
    percentile_5: f64,
    percentile_95: f64,
    seed: u64,
    horizon_months: usize,
}

impl SimulationResult {
    /// Builds a result from trial outcomes ordered by trial index.
    ///
    /// `seed` and `horizon_months` record the run's provenance so the
    /// population can be regenerated.
    pub fn from_outcomes(
        scenario_name: impl Into<String>,
        outcomes: Vec<TrialOutcome>,
        seed: u64,
        horizon_months: usize,
    ) -> Self {
        let n = outcomes.len();
        let mut net_present_values = Vec::with_capacity(n);
        let mut roi_values = Vec::with_capacity(n);
        let mut break_even_months = Vec::with_capacity(n);
        for outcome in outcomes {
            net_present_values.push(outcome.npv);
            roi_values.push(outcome.roi);
            break_even_months.push(outcome.break_even_month);
        }

        let ordered = sorted(&net_present_values);
        Self {
            scenario_name: scenario_name.into(),
            percentile_5: percentile(&ordered, LOWER_PERCENTILE),
            percentile_95: percentile(&ordered, UPPER_PERCENTILE),
            net_present_values,
            roi_values,
            break_even_months,
            seed,
            horizon_months,
        }
    }

    /// Returns the name of the simulated scenario.
    #[inline]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trial_count(&self) -> usize {
        self.net_present_values.len()
    }

    /// Returns the NPV of every trial, ordered by trial index.
    #[inline]
    pub fn net_present_values(&self) -> &[f64] {
        &self.net_present_values
    }

    /// Returns the ROI (percent) of every trial.
    #[inline]
    pub fn roi_values(&self) -> &[f64] {
        &self.roi_values
    }

    /// Returns the break-even month of every trial.
    #[inline]
    pub fn break_even_months(&self) -> &[Option<u32>] {
        &self.break_even_months
    }

    /// Returns the 5th percentile of the NPV distribution.
    #[inline]
    pub fn percentile_5(&self) -> f64 {
        self.percentile_5
    }

    /// Returns the 95th percentile of the NPV distribution.
    #[inline]
    pub fn percentile_95(&self) -> f64 {
        self.percentile_95
    }

    /// Returns the base seed of the run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the horizon of the run in months.
    #[inline]
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Returns the outcome of trial `index`, if it exists.
    pub fn outcome(&self, index: usize) -> Option<TrialOutcome> {
        Some(TrialOutcome {
            npv: *self.net_present_values.get(index)?,
            roi: self.roi_values[index],
            break_even_month: self.break_even_months[index],
        })
    }

    /// Iterates over all trial outcomes in trial order.
    pub fn outcomes(&self) -> impl Iterator<Item = TrialOutcome> + '_ {
        self.net_present_values
            .iter()
            .zip(&self.roi_values)
            .zip(&self.break_even_months)
            .map(|((&npv, &roi), &break_even_month)| TrialOutcome {
                npv,
                roi,
                break_even_month,
            })
    }

    /// Bins the NPV distribution into `bins` equal-width buckets.
    ///
    /// Returns an empty histogram when `bins` is zero or there are no trials.
    /// Requests above [`MAX_HISTOGRAM_BINS`] are clamped to it. When every
    /// NPV is identical all trials land in the first bucket.
    pub fn histogram(&self, bins: usize) -> Histogram {
        if bins == 0 || self.net_present_values.is_empty() {
            return Histogram::default();
        }
        let bins = bins.min(MAX_HISTOGRAM_BINS);

        let (min, max) = self
            .net_present_values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let width = (max - min) / bins as f64;

        let edges = (0..=bins)
            .map(|i| if i == bins { max } else { min + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &x in &self.net_present_values {
            let idx = if width > 0.0 {
                (((x - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Histogram { edges, counts }
    }
}

/// Equal-width histogram of NPV values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Histogram {
    /// Bucket boundaries, `counts.len() + 1` values in ascending order.
    pub edges: Vec<f64>,
    /// Number of trials per bucket.
    pub counts: Vec<usize>,
}
