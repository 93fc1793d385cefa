//! End-to-end checks from scenario to ranking.

use decision_core::{Scenario, ScenarioParams};
use decision_engine::mc::{MonteCarloEngine, SimulationConfig, SimulationConfigBuilder};
use decision_risk::{RiskMetrics, StatisticsCalculator, METRIC_KEYS};
use proptest::prelude::*;

#[allow(clippy::too_many_arguments)]
fn scenario(
    name: &str,
    initial_investment: f64,
    revenue_mean: f64,
    revenue_std: f64,
    cost_mean: f64,
    cost_std: f64,
    inflation_rate: f64,
    market_volatility: f64,
) -> Scenario {
    Scenario::new(ScenarioParams {
        name: name.to_string(),
        initial_investment,
        revenue_mean,
        revenue_std,
        cost_mean,
        cost_std,
        inflation_rate,
        market_volatility,
    })
    .unwrap()
}

fn reference_scenarios() -> Vec<Scenario> {
    vec![
        scenario("Lanzamiento Producto Premium", 150_000.0, 35_000.0, 8_000.0, 20_000.0, 4_000.0, 0.03, 0.20),
        scenario("Expansión Mercado Local", 80_000.0, 22_000.0, 5_000.0, 12_000.0, 2_500.0, 0.025, 0.12),
        scenario("Servicio Digital", 50_000.0, 18_000.0, 4_000.0, 8_000.0, 1_500.0, 0.02, 0.25),
    ]
}

fn assert_metric_bounds(m: &RiskMetrics) {
    for (key, value) in m.probabilities() {
        assert!((0.0..=100.0).contains(&value), "{} = {}", key, value);
    }
    assert!(m.cvar_95 >= m.var_95, "cvar {} < var {}", m.cvar_95, m.var_95);
    assert!(m.var_95 >= 0.0);
    assert!(m.std_npv >= 0.0);
}

#[test]
fn test_premium_launch_metrics() {
    let engine = MonteCarloEngine::new(SimulationConfigBuilder::batch().seed(42).build().unwrap());
    let result = engine.simulate(&reference_scenarios()[0]).unwrap();
    assert_eq!(result.net_present_values().len(), 10_000);

    let calc = StatisticsCalculator::new();
    let metrics = calc.risk_metrics(&result);
    assert_metric_bounds(&metrics);

    // Monthly net of 15 000 over 36 months with growth offset by discounting
    assert!((metrics.mean_npv - 390_000.0).abs() < 5_000.0, "{}", metrics.mean_npv);
    assert!(metrics.success_probability > 99.0);
    assert!(metrics.mean_roi > 500.0 && metrics.mean_roi < 600.0, "{}", metrics.mean_roi);
    assert!(metrics.mean_break_even > 6.0 && metrics.mean_break_even < 14.0);
    assert!(metrics.breakeven_within_6m_probability < 20.0);
    assert!(metrics.breakeven_within_12m_probability > 80.0);
    assert!(metrics.coefficient_of_variation > 0.0 && metrics.coefficient_of_variation < 1.0);
    assert!(metrics.skewness.is_finite());
    assert!(metrics.kurtosis.is_finite());
    for key in METRIC_KEYS {
        assert!(metrics.get(key).is_some());
    }

    // Same seed, same metrics
    let again = calc.risk_metrics(&engine.simulate(&reference_scenarios()[0]).unwrap());
    assert_eq!(metrics.mean_npv.to_bits(), again.mean_npv.to_bits());
    assert_eq!(metrics, again);
}

#[test]
fn test_reference_ranking() {
    let engine = MonteCarloEngine::new(SimulationConfigBuilder::batch().build().unwrap());
    let results: Vec<_> = reference_scenarios()
        .iter()
        .map(|s| engine.simulate(s).unwrap())
        .collect();

    let ranking = StatisticsCalculator::new().compare_scenarios(&results);
    assert_eq!(ranking.len(), 3);

    let names: Vec<&str> = ranking.iter().map(|r| r.scenario_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Lanzamiento Producto Premium",
            "Servicio Digital",
            "Expansión Mercado Local"
        ]
    );
    for row in &ranking {
        assert_metric_bounds(&row.metrics);
    }
}

#[test]
fn test_zero_variance_metrics() {
    let flat = scenario("Flat", 1_000.0, 500.0, 0.0, 200.0, 0.0, 0.0, 0.0);
    let engine = MonteCarloEngine::new(SimulationConfig::builder().n_trials(500).build().unwrap());
    let m = StatisticsCalculator::new().risk_metrics(&engine.simulate(&flat).unwrap());

    assert_eq!(m.std_npv, 0.0);
    assert_eq!(m.coefficient_of_variation, 0.0);
    assert!(m.skewness.is_nan());
    assert!(m.kurtosis.is_nan());
    assert_eq!(m.success_probability, 100.0);
    assert_eq!(m.mean_break_even, 4.0);
    assert_eq!(m.trials_without_break_even, 0);
}

#[test]
fn test_zero_variance_metrics_with_inexact_npv() {
    // Discounting at a non-dyadic rate leaves an NPV whose running sum drifts.
    let flat = scenario("Flat premium", 150_000.7, 35_000.3, 0.0, 20_000.1, 0.0, 0.031, 0.0);
    let engine = MonteCarloEngine::new(SimulationConfig::builder().n_trials(10_000).build().unwrap());
    let result = engine.simulate(&flat).unwrap();
    let first = result.net_present_values()[0];
    assert!(result.net_present_values().iter().all(|&npv| npv == first));

    let m = StatisticsCalculator::new().risk_metrics(&result);
    assert_eq!(m.mean_npv, first);
    assert_eq!(m.std_npv, 0.0);
    assert_eq!(m.coefficient_of_variation, 0.0);
    assert!(m.skewness.is_nan());
    assert!(m.kurtosis.is_nan());
    assert_eq!(m.cvar_95, m.var_95);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn metrics_respect_bounds(
        investment in 1_000.0f64..200_000.0,
        revenue_mean in 0.0f64..40_000.0,
        revenue_std in 0.0f64..10_000.0,
        cost_mean in 0.0f64..40_000.0,
        cost_std in 0.0f64..10_000.0,
        inflation in -0.02f64..0.05,
        volatility in 0.0f64..0.5,
        n_trials in 3usize..300,
        seed in any::<u64>(),
    ) {
        let s = scenario("Random", investment, revenue_mean, revenue_std, cost_mean, cost_std, inflation, volatility);
        let engine = MonteCarloEngine::new(
            SimulationConfig::builder().n_trials(n_trials).seed(seed).build().unwrap(),
        );
        let m = StatisticsCalculator::new().risk_metrics(&engine.simulate(&s).unwrap());

        for (_, value) in m.probabilities() {
            prop_assert!((0.0..=100.0).contains(&value));
        }
        prop_assert!(m.cvar_95 >= m.var_95);
        prop_assert!(m.coefficient_of_variation >= 0.0);
        prop_assert!(m.mean_break_even.is_nan() || (1.0..=36.0).contains(&m.mean_break_even));
        prop_assert!(m.breakeven_within_6m_probability <= m.breakeven_within_12m_probability);
    }
}
