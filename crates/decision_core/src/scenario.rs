//! Business scenario model.
//!
//! A [`Scenario`] is an immutable description of the stochastic monthly cash-flow
//! parameters of a business opportunity. It can only be obtained through
//! validation, so every `Scenario` in the program satisfies its invariants.

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Raw scenario inputs, prior to validation.
///
/// Field names are part of the external contract and must not change.
///
/// # Examples
///
/// ```rust
/// use decision_core::scenario::{Scenario, ScenarioParams};
///
/// let params = ScenarioParams {
///     name: "Servicio Digital".to_string(),
///     initial_investment: 50_000.0,
///     revenue_mean: 18_000.0,
///     revenue_std: 4_000.0,
///     cost_mean: 8_000.0,
///     cost_std: 1_500.0,
///     inflation_rate: 0.02,
///     market_volatility: 0.25,
/// };
/// let scenario = Scenario::new(params).unwrap();
/// assert_eq!(scenario.initial_investment(), 50_000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Identifier of the scenario (non-empty).
    pub name: String,
    /// Up-front investment, strictly positive.
    pub initial_investment: f64,
    /// Mean of the monthly revenue distribution.
    pub revenue_mean: f64,
    /// Standard deviation of the monthly revenue distribution.
    pub revenue_std: f64,
    /// Mean of the monthly cost distribution.
    pub cost_mean: f64,
    /// Standard deviation of the monthly cost distribution.
    pub cost_std: f64,
    /// Fractional per-month growth applied to the net cash flow.
    pub inflation_rate: f64,
    /// Standard deviation of the multiplicative monthly market shock.
    pub market_volatility: f64,
}

/// Validated, immutable business scenario.
///
/// # Invariants
///
/// - `name` is not empty
/// - every numeric field is finite
/// - `initial_investment > 0`
/// - `revenue_mean`, `revenue_std`, `cost_mean`, `cost_std`, `market_volatility` are `>= 0`
/// - `inflation_rate > -1` (growth factors stay positive)
///
/// Deserialisation goes through [`Scenario::new`], so a deserialised scenario
/// satisfies the same invariants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioParams", into = "ScenarioParams")]
pub struct Scenario {
    name: String,
    initial_investment: f64,
    revenue_mean: f64,
    revenue_std: f64,
    cost_mean: f64,
    cost_std: f64,
    inflation_rate: f64,
    market_volatility: f64,
}

impl Scenario {
    /// Validates `params` and builds a scenario.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that violates the
    /// invariants, checked in declaration order.
    pub fn new(params: ScenarioParams) -> Result<Self, ValidationError> {
        if params.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        check_finite("initial_investment", params.initial_investment)?;
        if params.initial_investment <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "initial_investment",
                value: params.initial_investment,
            });
        }

        check_non_negative("revenue_mean", params.revenue_mean)?;
        check_non_negative("revenue_std", params.revenue_std)?;
        check_non_negative("cost_mean", params.cost_mean)?;
        check_non_negative("cost_std", params.cost_std)?;

        check_finite("inflation_rate", params.inflation_rate)?;
        if params.inflation_rate <= -1.0 {
            return Err(ValidationError::OutOfRange {
                field: "inflation_rate",
                value: params.inflation_rate,
                constraint: "must be greater than -1",
            });
        }

        check_non_negative("market_volatility", params.market_volatility)?;

        Ok(Self {
            name: params.name,
            initial_investment: params.initial_investment,
            revenue_mean: params.revenue_mean,
            revenue_std: params.revenue_std,
            cost_mean: params.cost_mean,
            cost_std: params.cost_std,
            inflation_rate: params.inflation_rate,
            market_volatility: params.market_volatility,
        })
    }

    /// Returns the scenario name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the initial investment.
    #[inline]
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    /// Returns the monthly revenue mean.
    #[inline]
    pub fn revenue_mean(&self) -> f64 {
        self.revenue_mean
    }

    /// Returns the monthly revenue standard deviation.
    #[inline]
    pub fn revenue_std(&self) -> f64 {
        self.revenue_std
    }

    /// Returns the monthly cost mean.
    #[inline]
    pub fn cost_mean(&self) -> f64 {
        self.cost_mean
    }

    /// Returns the monthly cost standard deviation.
    #[inline]
    pub fn cost_std(&self) -> f64 {
        self.cost_std
    }

    /// Returns the per-month inflation (growth) rate.
    #[inline]
    pub fn inflation_rate(&self) -> f64 {
        self.inflation_rate
    }

    /// Returns the market shock volatility.
    #[inline]
    pub fn market_volatility(&self) -> f64 {
        self.market_volatility
    }

    /// Returns a copy of the raw parameters.
    pub fn params(&self) -> ScenarioParams {
        ScenarioParams {
            name: self.name.clone(),
            initial_investment: self.initial_investment,
            revenue_mean: self.revenue_mean,
            revenue_std: self.revenue_std,
            cost_mean: self.cost_mean,
            cost_std: self.cost_std,
            inflation_rate: self.inflation_rate,
            market_volatility: self.market_volatility,
        }
    }
}

impl TryFrom<ScenarioParams> for Scenario {
    type Error = ValidationError;

    fn try_from(params: ScenarioParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<Scenario> for ScenarioParams {
    fn from(scenario: Scenario) -> Self {
        ScenarioParams {
            name: scenario.name,
            initial_investment: scenario.initial_investment,
            revenue_mean: scenario.revenue_mean,
            revenue_std: scenario.revenue_std,
            cost_mean: scenario.cost_mean,
            cost_std: scenario.cost_std,
            inflation_rate: scenario.inflation_rate,
            market_volatility: scenario.market_volatility,
        }
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
