//! CLI configuration management.
//!
//! Settings are read from a TOML file (default `decision.toml`). A missing
//! file falls back to defaults. Environment variables override file values:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `DECISION_TRIALS` | `trials` |
//! | `DECISION_SEED` | `seed` |
//! | `DECISION_HORIZON` | `horizon_months` |
//! | `DECISION_LOG_LEVEL` | `log_level` |
//!
//! ```toml
//! trials = 10000
//! seed = 42
//! horizon_months = 36
//! break_even = "undiscounted"
//!
//! [[scenarios]]
//! name = "Servicio Digital"
//! initial_investment = 50000.0
//! revenue_mean = 18000.0
//! revenue_std = 4000.0
//! cost_mean = 8000.0
//! cost_std = 1500.0
//! inflation_rate = 0.02
//! market_volatility = 0.25
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use decision_core::{Scenario, ScenarioParams};
use decision_engine::mc::{
    BreakEvenBasis, DiscountRate, SimulationConfigBuilder, BATCH_TRIALS, DEFAULT_HORIZON_MONTHS,
    DEFAULT_SEED, MAX_HORIZON_MONTHS, MAX_TRIALS,
};
use serde::Deserialize;
use thiserror::Error;

/// Valid `log_level` values.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Cumulative series used to detect break-even.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BreakEvenSetting {
    /// Undiscounted cumulative cash flow
    #[default]
    Undiscounted,
    /// Discounted cumulative cash flow
    Discounted,
}

impl From<BreakEvenSetting> for BreakEvenBasis {
    fn from(setting: BreakEvenSetting) -> Self {
        match setting {
            BreakEvenSetting::Undiscounted => BreakEvenBasis::Undiscounted,
            BreakEvenSetting::Discounted => BreakEvenBasis::Discounted,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Trials per scenario for `demo` and `compare`
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Base seed
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Simulation horizon in months
    #[serde(default = "default_horizon")]
    pub horizon_months: usize,

    /// Fixed monthly discount rate; the scenario's inflation rate when absent
    pub discount_rate: Option<f64>,

    /// Break-even series
    #[serde(default)]
    pub break_even: BreakEvenSetting,

    /// Worker threads; rayon's global pool when absent
    pub threads: Option<usize>,

    /// Wall-clock limit per scenario, in seconds
    pub time_limit_secs: Option<u64>,

    /// Scenarios compared by `compare`
    #[serde(default)]
    pub scenarios: Vec<ScenarioParams>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_trials() -> usize {
    BATCH_TRIALS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_horizon() -> usize {
    DEFAULT_HORIZON_MONTHS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            trials: default_trials(),
            seed: default_seed(),
            horizon_months: default_horizon(),
            discount_rate: None,
            break_even: BreakEvenSetting::default(),
            threads: None,
            time_limit_secs: None,
            scenarios: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise defaults; then apply environment
    /// overrides and validate.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        let config = config.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trials) = lookup("DECISION_TRIALS") {
            self.trials = parse_var("DECISION_TRIALS", &trials)?;
        }
        if let Some(seed) = lookup("DECISION_SEED") {
            self.seed = parse_var("DECISION_SEED", &seed)?;
        }
        if let Some(horizon) = lookup("DECISION_HORIZON") {
            self.horizon_months = parse_var("DECISION_HORIZON", &horizon)?;
        }
        if let Some(log_level) = lookup("DECISION_LOG_LEVEL") {
            self.log_level = log_level;
        }
        Ok(self)
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if self.trials == 0 || self.trials > MAX_TRIALS {
            errors.push(format!(
                "trials {} outside allowed range [1, {}]",
                self.trials, MAX_TRIALS
            ));
        }

        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            errors.push(format!(
                "horizon_months {} outside allowed range [1, {}]",
                self.horizon_months, MAX_HORIZON_MONTHS
            ));
        }

        if let Some(rate) = self.discount_rate {
            if !rate.is_finite() || rate <= -1.0 {
                errors.push(format!(
                    "discount_rate {} must be finite and greater than -1",
                    rate
                ));
            }
        }

        if self.threads == Some(0) {
            errors.push("threads must be greater than 0".to_string());
        }

        let mut names = HashSet::new();
        for (index, params) in self.scenarios.iter().enumerate() {
            if let Err(e) = Scenario::new(params.clone()) {
                errors.push(format!("scenarios[{}]: {}", index, e));
            }
            if !names.insert(params.name.trim()) {
                errors.push(format!(
                    "scenarios[{}]: duplicate scenario name '{}'",
                    index, params.name
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Engine settings derived from this configuration.
    ///
    /// The trial count is left unset so each command picks its own.
    pub fn simulation_builder(&self) -> SimulationConfigBuilder {
        let mut builder = SimulationConfigBuilder::default()
            .seed(self.seed)
            .horizon_months(self.horizon_months)
            .break_even_basis(self.break_even.into());
        if let Some(rate) = self.discount_rate {
            builder = builder.discount_rate(DiscountRate::Monthly(rate));
        }
        if let Some(threads) = self.threads {
            builder = builder.thread_count(threads);
        }
        if let Some(secs) = self.time_limit_secs {
            builder = builder.time_limit(Duration::from_secs(secs));
        }
        builder
    }

    /// Validated scenarios listed in the file.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, decision_core::ValidationError> {
        self.scenarios.iter().cloned().map(Scenario::new).collect()
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Environment {
        name,
        value: raw.to_string(),
    })
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment variable could not be parsed
    #[error("Invalid value '{value}' for environment variable {name}")]
    Environment {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
