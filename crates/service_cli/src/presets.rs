//! Built-in reference scenarios.
//!
//! Used by `demo`, and by `compare` when the configuration lists none.

use decision_core::ScenarioParams;

/// Premium product launch: large outlay, strong margins, volatile market.
pub fn premium_launch() -> ScenarioParams {
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

/// Local market expansion: moderate outlay, calm market.
pub fn local_expansion() -> ScenarioParams {
    ScenarioParams {
        name: "Expansión Mercado Local".to_string(),
        initial_investment: 80_000.0,
        revenue_mean: 22_000.0,
        revenue_std: 5_000.0,
        cost_mean: 12_000.0,
        cost_std: 2_500.0,
        inflation_rate: 0.025,
        market_volatility: 0.12,
    }
}

/// Digital service: small outlay, most volatile market.
pub fn digital_service() -> ScenarioParams {
    ScenarioParams {
        name: "Servicio Digital".to_string(),
        initial_investment: 50_000.0,
        revenue_mean: 18_000.0,
        revenue_std: 4_000.0,
        cost_mean: 8_000.0,
        cost_std: 1_500.0,
        inflation_rate: 0.02,
        market_volatility: 0.25,
    }
}

/// All reference scenarios in presentation order.
pub fn reference_scenarios() -> Vec<ScenarioParams> {
    vec![premium_launch(), local_expansion(), digital_service()]
}
