//! Reproducibility and structural properties of the Monte Carlo engine.
//!
//! # Test Categories
//!
//! 1. **Determinism**: identical seeds give bit-identical populations
//! 2. **Parallel invariance**: results do not depend on scheduling
//! 3. **Model properties**: zero-variance collapse and monotonicity

use decision_core::math::statistics::mean;
use decision_core::{Scenario, ScenarioParams};
use decision_engine::mc::{
    ExecutionMode, MonteCarloEngine, SimulationConfig, SimulationConfigBuilder,
};
use proptest::prelude::*;

fn premium_params() -> ScenarioParams {
    ScenarioParams {
        name: "Lanzamiento Producto Premium".to_string(),
        initial_investment: 150_000.0,
        revenue_mean: 35_000.0,
        revenue_std: 8_000.0,
        cost_mean: 20_000.0,
        cost_std: 4_000.0,
        inflation_rate: 0.03,
        market_volatility: 0.20,
    }
}

fn seeded_engine(n_trials: usize, seed: u64) -> MonteCarloEngine {
    MonteCarloEngine::new(
        SimulationConfig::builder()
            .n_trials(n_trials)
            .seed(seed)
            .build()
            .unwrap(),
    )
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_bit_identical() {
    let scenario = Scenario::new(premium_params()).unwrap();
    let engine = MonteCarloEngine::new(SimulationConfigBuilder::batch().seed(42).build().unwrap());

    let first = engine.simulate(&scenario).unwrap();
    let second = engine.simulate(&scenario).unwrap();

    assert_eq!(first.trial_count(), 10_000);
    let a: Vec<u64> = first.net_present_values().iter().map(|x| x.to_bits()).collect();
    let b: Vec<u64> = second.net_present_values().iter().map(|x| x.to_bits()).collect();
    assert_eq!(a, b);
    assert_eq!(first.percentile_5().to_bits(), second.percentile_5().to_bits());
}

#[test]
fn test_different_seeds_differ() {
    let scenario = Scenario::new(premium_params()).unwrap();
    let a = seeded_engine(500, 1).simulate(&scenario).unwrap();
    let b = seeded_engine(500, 2).simulate(&scenario).unwrap();
    assert_ne!(a.net_present_values(), b.net_present_values());
}

#[test]
fn test_prefix_stable_across_trial_counts() {
    // Trial i depends only on (seed, i), so a longer run extends a shorter one
    let scenario = Scenario::new(premium_params()).unwrap();
    let short = seeded_engine(100, 9).simulate(&scenario).unwrap();
    let long = seeded_engine(1_500, 9).simulate(&scenario).unwrap();
    assert_eq!(short.net_present_values(), &long.net_present_values()[..100]);
}

// ============================================================================
// Parallel invariance
// ============================================================================

#[test]
fn test_thread_count_invariance() {
    let scenario = Scenario::new(premium_params()).unwrap();
    let reference = MonteCarloEngine::new(
        SimulationConfig::builder()
            .n_trials(3_000)
            .execution(ExecutionMode::Sequential)
            .build()
            .unwrap(),
    )
    .simulate(&scenario)
    .unwrap();

    for threads in [1, 2, 3, 8] {
        let engine = MonteCarloEngine::new(
            SimulationConfig::builder()
                .n_trials(3_000)
                .execution(ExecutionMode::Parallel)
                .thread_count(threads)
                .build()
                .unwrap(),
        );
        let result = engine.simulate(&scenario).unwrap();
        assert_eq!(
            result.net_present_values(),
            reference.net_present_values(),
            "threads = {}",
            threads
        );
        assert_eq!(result.break_even_months(), reference.break_even_months());
    }
}

// ============================================================================
// Model properties
// ============================================================================

#[test]
fn test_zero_variance_collapse() {
    let mut params = premium_params();
    params.revenue_std = 0.0;
    params.cost_std = 0.0;
    params.market_volatility = 0.0;
    let scenario = Scenario::new(params).unwrap();

    let result = seeded_engine(2_000, 42).simulate(&scenario).unwrap();
    let first = result.net_present_values()[0];
    assert!(result.net_present_values().iter().all(|&x| x == first));
    assert_eq!(result.percentile_5(), first);
    assert_eq!(result.percentile_95(), first);

    // Inflation-linked discounting cancels growth: 36 months of 15 000 net
    assert!((first - (-150_000.0 + 36.0 * 15_000.0)).abs() < 1e-6);
    // Undiscounted cumulative 15 000 * sum(1.03^k) first covers 150 000 at month 9
    assert!(result.break_even_months().iter().all(|&m| m == Some(9)));
}

#[test]
fn test_revenue_mean_monotonicity() {
    let engine = seeded_engine(2_000, 42);
    let base = engine.simulate(&Scenario::new(premium_params()).unwrap()).unwrap();

    let mut richer = premium_params();
    richer.revenue_mean += 1_000.0;
    let richer = engine.simulate(&Scenario::new(richer).unwrap()).unwrap();

    assert!(mean(richer.net_present_values()) > mean(base.net_present_values()));
}

#[test]
fn test_break_even_bounded_by_horizon() {
    let scenario = Scenario::new(premium_params()).unwrap();
    let short = MonteCarloEngine::new(
        SimulationConfig::builder()
            .n_trials(1_000)
            .horizon_months(6)
            .build()
            .unwrap(),
    )
    .simulate(&scenario)
    .unwrap();

    assert_eq!(short.horizon_months(), 6);
    assert!(short.break_even_months().iter().all(|m| m.map_or(true, |v| v <= 6)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn cardinality_matches_trial_count(n_trials in 1usize..400, seed in any::<u64>()) {
        let scenario = Scenario::new(premium_params()).unwrap();
        let result = seeded_engine(n_trials, seed).simulate(&scenario).unwrap();
        prop_assert_eq!(result.net_present_values().len(), n_trials);
        prop_assert_eq!(result.roi_values().len(), n_trials);
        prop_assert!(result.percentile_5() <= result.percentile_95());
    }
}
