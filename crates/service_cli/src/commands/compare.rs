//! Compare command: rank the configured scenarios.
//!
//! Scenarios come from the `[[scenarios]]` list of the configuration file;
//! the built-in reference scenarios are used when it is empty.

use std::io::Write;
use std::path::Path;

use decision_core::Scenario;
use decision_engine::mc::{CancellationToken, MonteCarloEngine};
use decision_risk::StatisticsCalculator;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{ranking_table, write_json, write_ranking_csv, OutputFormat};
use crate::presets::reference_scenarios;
use crate::Result;

/// Runs the comparison, printing to stdout or writing to `output`.
///
/// `output` is only created once the ranking has been rendered, so a failed
/// run leaves any existing file untouched.
pub fn run(config: &CliConfig, format: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut rendered = Vec::new();
            execute(config, format, &mut rendered)?;
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "Ranking written");
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            execute(config, format, &mut stdout.lock())
        }
    }
}

/// Runs the comparison, writing the ranking to `out`.
pub fn execute<W: Write>(config: &CliConfig, format: &str, out: &mut W) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let scenarios = if config.scenarios.is_empty() {
        warn!("No scenarios configured, comparing the reference scenarios");
        reference_scenarios()
            .into_iter()
            .map(Scenario::new)
            .collect::<std::result::Result<Vec<_>, _>>()?
    } else {
        config.scenarios()?
    };

    let engine = MonteCarloEngine::new(config.simulation_builder().n_trials(config.trials).build()?);
    info!(
        scenarios = scenarios.len(),
        trials = config.trials,
        "Comparing scenarios"
    );
    let results = engine.simulate_many(&scenarios, &CancellationToken::new())?;
    let ranking = StatisticsCalculator::new().compare_scenarios(&results);

    match format {
        OutputFormat::Table => write!(out, "{}", ranking_table(&ranking))?,
        OutputFormat::Json => write_json(&mut *out, &ranking)?,
        OutputFormat::Csv => write_ranking_csv(&mut *out, &ranking)?,
    }
    Ok(())
}
