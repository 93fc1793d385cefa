//! Simulate command: one scenario described on the command line.

use std::io::Write;

use clap::Args;
use decision_core::{Scenario, ScenarioParams};
use decision_engine::mc::{Histogram, MonteCarloEngine, INTERACTIVE_TRIALS, MAX_HISTOGRAM_BINS};
use decision_risk::{RiskMetrics, StatisticsCalculator};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{
    format_money, metrics_table, render_table, write_json, write_metrics_csv, OutputFormat,
};
use crate::{CliError, Result};

/// Scenario and run options for `decision simulate`.
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Scenario name
    #[arg(short, long, default_value = "Custom scenario")]
    pub name: String,

    /// Up-front investment
    #[arg(long)]
    pub investment: f64,

    /// Mean monthly revenue
    #[arg(long)]
    pub revenue_mean: f64,

    /// Standard deviation of monthly revenue
    #[arg(long, default_value_t = 0.0)]
    pub revenue_std: f64,

    /// Mean monthly cost
    #[arg(long)]
    pub cost_mean: f64,

    /// Standard deviation of monthly cost
    #[arg(long, default_value_t = 0.0)]
    pub cost_std: f64,

    /// Monthly inflation rate (0.03 = 3%)
    #[arg(long, default_value_t = 0.0)]
    pub inflation: f64,

    /// Market volatility (std deviation of the monthly shock)
    #[arg(long, default_value_t = 0.0)]
    pub volatility: f64,

    /// Number of Monte Carlo trials
    #[arg(short, long, default_value_t = INTERACTIVE_TRIALS)]
    pub trials: usize,

    /// Base seed (overrides the configuration)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Horizon in months (overrides the configuration)
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Number of NPV histogram bins to include (at most 1000)
    #[arg(long)]
    pub bins: Option<usize>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

impl SimulateArgs {
    fn params(&self) -> ScenarioParams {
        ScenarioParams {
            name: self.name.clone(),
            initial_investment: self.investment,
            revenue_mean: self.revenue_mean,
            revenue_std: self.revenue_std,
            cost_mean: self.cost_mean,
            cost_std: self.cost_std,
            inflation_rate: self.inflation,
            market_volatility: self.volatility,
        }
    }
}

/// JSON report of one simulation.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Scenario name
    pub escenario: String,
    /// Trials run
    pub trials: usize,
    /// Base seed
    pub seed: u64,
    /// Horizon in months
    pub horizon_months: usize,
    /// 5th NPV percentile
    pub percentile_5: f64,
    /// 95th NPV percentile
    pub percentile_95: f64,
    /// Risk metrics
    pub metrics: RiskMetrics,
    /// NPV histogram, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Histogram>,
}

/// Runs the simulation, printing to stdout.
pub fn run(config: &CliConfig, args: &SimulateArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(config, args, &mut stdout.lock())
}

/// Runs the simulation, writing the report to `out`.
pub fn execute<W: Write>(config: &CliConfig, args: &SimulateArgs, out: &mut W) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    if let Some(bins) = args.bins.filter(|&bins| bins > MAX_HISTOGRAM_BINS) {
        return Err(CliError::InvalidArgument(format!(
            "--bins {bins} exceeds the maximum of {MAX_HISTOGRAM_BINS}"
        )));
    }
    let scenario = Scenario::new(args.params())?;

    let mut builder = config.simulation_builder().n_trials(args.trials);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(horizon) = args.horizon {
        builder = builder.horizon_months(horizon);
    }
    let engine = MonteCarloEngine::new(builder.build()?);

    info!(scenario = scenario.name(), trials = args.trials, "Starting simulation");
    let result = engine.simulate(&scenario)?;
    let metrics = StatisticsCalculator::new().risk_metrics(&result);
    let histogram = args.bins.map(|bins| result.histogram(bins));

    match format {
        OutputFormat::Json => {
            let report = SimulationReport {
                escenario: result.scenario_name().to_string(),
                trials: result.trial_count(),
                seed: result.seed(),
                horizon_months: result.horizon_months(),
                percentile_5: result.percentile_5(),
                percentile_95: result.percentile_95(),
                metrics,
                histogram,
            };
            write_json(&mut *out, &report)?;
        }
        OutputFormat::Csv => write_metrics_csv(&mut *out, &metrics)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "Scenario: {} ({} trials, seed {}, {} months)",
                result.scenario_name(),
                result.trial_count(),
                result.seed(),
                result.horizon_months()
            )?;
            writeln!(
                out,
                "NPV P5: {}   P95: {}",
                format_money(result.percentile_5()),
                format_money(result.percentile_95())
            )?;
            write!(out, "{}", metrics_table(&metrics))?;
            if metrics.trials_without_break_even > 0 {
                writeln!(
                    out,
                    "{} trials did not break even within the horizon",
                    metrics.trials_without_break_even
                )?;
            }
            if let Some(histogram) = histogram {
                write!(out, "{}", histogram_table(&histogram))?;
            }
        }
    }

    info!("Simulation complete");
    Ok(())
}

/// Width of the longest histogram bar.
const BAR_WIDTH: usize = 40;

fn histogram_table(histogram: &Histogram) -> String {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    let rows: Vec<Vec<String>> = histogram
        .counts
        .iter()
        .zip(histogram.edges.windows(2))
        .map(|(&count, edge)| {
            vec![
                format!("{} .. {}", format_money(edge[0]), format_money(edge[1])),
                count.to_string(),
                "#".repeat(count * BAR_WIDTH / peak),
            ]
        })
        .collect();
    render_table(&["NPV range", "Trials", ""], &rows)
}
