//! Demo command: the three reference scenarios, simulated and ranked.
//!
//! # Expected Output
//!
//! ```text
//! Business Decision Assistant - Monte Carlo
//! ============================================================
//!
//! Running Monte Carlo simulations (10000 trials each)...
//!
//! Simulating: Lanzamiento Producto Premium
//!    Mean NPV: $390,412
//!    Success probability: 100.0%
//!    ...
//! ```

use std::io::Write;

use decision_core::Scenario;
use decision_engine::mc::MonteCarloEngine;
use decision_risk::StatisticsCalculator;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{format_money, format_percent};
use crate::presets::reference_scenarios;
use crate::Result;

/// Runs the demo, printing to stdout.
pub fn run(config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    execute(config, &mut stdout.lock())
}

/// Runs the demo, writing the report to `out`.
pub fn execute<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let scenarios = reference_scenarios()
        .into_iter()
        .map(Scenario::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let engine = MonteCarloEngine::new(config.simulation_builder().n_trials(config.trials).build()?);
    let calculator = StatisticsCalculator::new();

    writeln!(out, "Business Decision Assistant - Monte Carlo")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;
    writeln!(
        out,
        "Running Monte Carlo simulations ({} trials each)...",
        engine.config().n_trials()
    )?;

    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        info!(scenario = scenario.name(), "Simulating");
        writeln!(out)?;
        writeln!(out, "Simulating: {}", scenario.name())?;

        let result = engine.simulate(scenario)?;
        let metrics = calculator.risk_metrics(&result);
        writeln!(out, "   Mean NPV: {}", format_money(metrics.mean_npv))?;
        writeln!(
            out,
            "   Success probability: {}",
            format_percent(metrics.success_probability)
        )?;
        writeln!(out, "   Mean ROI: {}", format_percent(metrics.mean_roi))?;
        writeln!(out, "   VaR 95%: {}", format_money(metrics.var_95))?;
        results.push(result);
    }

    writeln!(out)?;
    writeln!(out, "Scenario comparison:")?;
    writeln!(out, "{}", "=".repeat(40))?;
    let ranking = calculator.compare_scenarios(&results);
    for (idx, row) in ranking.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, row.scenario_name)?;
        writeln!(out, "   Attractiveness score: {:.3}", row.score_atractivo)?;
        writeln!(out, "   NPV: {}", format_money(row.metrics.mean_npv))?;
        writeln!(
            out,
            "   Success probability: {}",
            format_percent(row.metrics.success_probability)
        )?;
        writeln!(out)?;
    }

    info!(scenarios = results.len(), "Demo complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report() {
        let config = CliConfig {
            trials: 300,
            ..Default::default()
        };
        let mut buffer = Vec::new();
        execute(&config, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("(300 trials each)"));
        assert!(text.contains("Simulating: Lanzamiento Producto Premium"));
        assert!(text.contains("Simulating: Expansión Mercado Local"));
        assert!(text.contains("Simulating: Servicio Digital"));
        assert_eq!(text.matches("VaR 95%:").count(), 3);
        assert!(text.contains("1. "));
        assert!(text.contains("3. "));
        assert_eq!(text.matches("Attractiveness score:").count(), 3);
    }
}
