//! Single-trial cash-flow path.
//!
//! One trial walks the horizon month by month:
//!
//! ```text
//! revenue_m ~ N(revenue_mean, revenue_std)
//! cost_m    ~ N(cost_mean, cost_std)
//! shock_m   ~ N(1, market_volatility)
//! net_cf_m  = (revenue_m - cost_m) * (1 + inflation)^m * shock_m
//! cumulative += net_cf_m
//! npv        += net_cf_m / (1 + r)^m
//! ```
//!
//! Both running totals start at `-initial_investment`. Draws are consumed in
//! the fixed order revenue, cost, shock so a trial's path depends only on its
//! seed.

use decision_core::Scenario;
use serde::Serialize;

use super::config::{BreakEvenBasis, SimulationConfig};
use crate::rng::TrialRng;

/// Outcome of one simulated trial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrialOutcome {
    /// Net present value at the end of the horizon.
    pub npv: f64,
    /// Undiscounted return on investment, in percent.
    pub roi: f64,
    /// First month (1-based) at which the break-even series is non-negative.
    pub break_even_month: Option<u32>,
}

/// Per-scenario constants shared read-only by every trial of a run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrialKernel {
    initial_investment: f64,
    revenue_mean: f64,
    revenue_std: f64,
    cost_mean: f64,
    cost_std: f64,
    volatility: f64,
    growth_step: f64,
    discount_step: f64,
    horizon_months: u32,
    basis: BreakEvenBasis,
}

impl TrialKernel {
    pub(crate) fn new(scenario: &Scenario, config: &SimulationConfig) -> Self {
        Self {
            initial_investment: scenario.initial_investment(),
            revenue_mean: scenario.revenue_mean(),
            revenue_std: scenario.revenue_std(),
            cost_mean: scenario.cost_mean(),
            cost_std: scenario.cost_std(),
            volatility: scenario.market_volatility(),
            growth_step: 1.0 + scenario.inflation_rate(),
            discount_step: 1.0 + config.discount_rate().resolve(scenario),
            // Bounded by MAX_HORIZON_MONTHS
            horizon_months: config.horizon_months() as u32,
            basis: config.break_even_basis(),
        }
    }

    /// Monthly discount rate applied by this kernel.
    pub(crate) fn discount_rate(&self) -> f64 {
        self.discount_step - 1.0
    }

    /// Runs one trial with the given generator.
    pub(crate) fn run(&self, rng: &mut TrialRng) -> TrialOutcome {
        let mut cumulative = -self.initial_investment;
        let mut npv = -self.initial_investment;
        let mut growth = 1.0;
        let mut discount = 1.0;
        let mut break_even_month = None;

        for month in 1..=self.horizon_months {
            let revenue = rng.gen_normal_with(self.revenue_mean, self.revenue_std);
            let cost = rng.gen_normal_with(self.cost_mean, self.cost_std);
            let shock = rng.gen_normal_with(1.0, self.volatility);

            growth *= self.growth_step;
            discount *= self.discount_step;

            let net_cf = (revenue - cost) * growth * shock;
            cumulative += net_cf;
            npv += net_cf / discount;

            if break_even_month.is_none() {
                let level = match self.basis {
                    BreakEvenBasis::Undiscounted => cumulative,
                    BreakEvenBasis::Discounted => npv,
                };
                if level >= 0.0 {
                    break_even_month = Some(month);
                }
            }
        }

        TrialOutcome {
            npv,
            roi: 100.0 * cumulative / self.initial_investment,
            break_even_month,
        }
    }
}
