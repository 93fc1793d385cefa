//! Decision CLI - Monte Carlo business decision analysis
//!
//! Simulates business scenarios under uncertainty and ranks them by risk and
//! return.
//!
//! # Commands
//!
//! - `decision demo` - Simulate and rank the three reference scenarios
//! - `decision simulate --investment <x> --revenue-mean <x> --cost-mean <x>` -
//!   Simulate one scenario described by flags
//! - `decision compare` - Rank the scenarios listed in the configuration
//! - `decision check` - Check configuration, environment and engine
//!
//! # Configuration
//!
//! Settings are read from `decision.toml` (override with `--config`) and the
//! `DECISION_*` environment variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;
mod presets;

pub use error::{CliError, Result};

use commands::simulate::SimulateArgs;
use config::CliConfig;

/// Monte Carlo business decision assistant
#[derive(Parser)]
#[command(name = "decision")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "decision.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and rank the reference scenarios
    Demo,

    /// Simulate one scenario described on the command line
    Simulate(SimulateArgs),

    /// Rank the configured scenarios
    Compare {
        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the ranking to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration, environment and engine
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config);
    let level = if cli.verbose {
        "debug"
    } else {
        config.as_ref().map_or("info", |c| c.log_level.as_str())
    };
    init_tracing(level);
    debug!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Check => commands::check::run(&cli.config, config),
        Commands::Demo => commands::demo::run(&config?),
        Commands::Simulate(args) => commands::simulate::run(&config?, &args),
        Commands::Compare { format, output } => {
            commands::compare::run(&config?, &format, output.as_deref())
        }
    }
}

/// Logs go to stderr so stdout carries only command output. `RUST_LOG`
/// takes precedence over `level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
