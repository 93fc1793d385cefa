//! Check command: configuration, environment and engine sanity checks.

use std::io::Write;
use std::path::Path;

use decision_core::Scenario;
use decision_engine::mc::{ExecutionMode, MonteCarloEngine, SimulationConfig};
use tracing::info;

use crate::config::{CliConfig, ConfigError};
use crate::presets::digital_service;
use crate::{CliError, Result};

/// Environment variables read by the configuration loader.
const ENV_VARS: [&str; 5] = [
    "DECISION_TRIALS",
    "DECISION_SEED",
    "DECISION_HORIZON",
    "DECISION_LOG_LEVEL",
    "RUST_LOG",
];

/// Trials used by the determinism self-test.
const SELF_TEST_TRIALS: usize = 2_000;

/// Runs the checks, printing to stdout.
pub fn run(path: &Path, config: std::result::Result<CliConfig, ConfigError>) -> Result<()> {
    let stdout = std::io::stdout();
    execute(path, config, &mut stdout.lock())
}

/// Runs the checks, writing the report to `out`.
///
/// A configuration problem is reported and then returned as the error.
pub fn execute<W: Write>(
    path: &Path,
    config: std::result::Result<CliConfig, ConfigError>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Checking decision environment...")?;

    let source = if path.exists() {
        "found"
    } else {
        "not found, using defaults"
    };
    writeln!(out, "Config file: {} ({})", path.display(), source)?;

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            writeln!(out, "Configuration: INVALID")?;
            writeln!(out, "  {}", err)?;
            return Err(err.into());
        }
    };
    writeln!(out, "Configuration: OK")?;
    writeln!(
        out,
        "  trials={} seed={} horizon={}m scenarios={}",
        config.trials,
        config.seed,
        config.horizon_months,
        config.scenarios.len()
    )?;

    writeln!(out, "Environment:")?;
    for name in ENV_VARS {
        match std::env::var(name) {
            Ok(value) => writeln!(out, "  {}: {}", name, value)?,
            Err(_) => writeln!(out, "  {}: (not set)", name)?,
        }
    }

    writeln!(out, "Worker threads: {}", rayon::current_num_threads())?;

    let identical = self_test()?;
    info!(identical, "Check complete");
    report_self_test(identical, out)
}

/// Writes the self-test verdict; a mismatch is returned as the error.
fn report_self_test<W: Write>(identical: bool, out: &mut W) -> Result<()> {
    if identical {
        writeln!(out, "Engine self-test: OK (sequential and parallel runs agree)")?;
        Ok(())
    } else {
        writeln!(out, "Engine self-test: FAILED (sequential and parallel runs differ)")?;
        Err(CliError::SelfTest(
            "sequential and parallel runs differ for the same seed".to_string(),
        ))
    }
}

/// Runs one scenario sequentially and in parallel with the same seed.
fn self_test() -> Result<bool> {
    let scenario = Scenario::new(digital_service())?;
    let run = |mode: ExecutionMode| -> Result<Vec<f64>> {
        let config = SimulationConfig::builder()
            .n_trials(SELF_TEST_TRIALS)
            .execution(mode)
            .build()?;
        let result = MonteCarloEngine::new(config).simulate(&scenario)?;
        Ok(result.net_present_values().to_vec())
    };
    Ok(run(ExecutionMode::Sequential)? == run(ExecutionMode::Parallel)?)
}
