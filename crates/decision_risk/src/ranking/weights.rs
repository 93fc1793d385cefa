use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Weights of the attractiveness score.
///
/// The defaults weigh success probability and normalised mean NPV equally and
/// apply a smaller dispersion penalty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    success: f64,
    npv: f64,
    dispersion: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            success: 0.4,
            npv: 0.4,
            dispersion: 0.2,
        }
    }
}

impl ScoringWeights {
    /// Creates validated weights.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidWeight` for a negative or non-finite weight.
    pub fn new(success: f64, npv: f64, dispersion: f64) -> Result<Self, RiskError> {
        for (name, value) in [("success", success), ("npv", npv), ("dispersion", dispersion)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskError::InvalidWeight { name, value });
            }
        }
        Ok(Self {
            success,
            npv,
            dispersion,
        })
    }

    /// Weight of the success probability term.
    #[inline]
    pub fn success(&self) -> f64 {
        self.success
    }

    /// Weight of the normalised mean NPV term.
    #[inline]
    pub fn npv(&self) -> f64 {
        self.npv
    }

    /// Weight of the coefficient-of-variation penalty.
    #[inline]
    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Combines the three score components.
    ///
    /// A zero dispersion weight ignores the penalty entirely, so an infinite
    /// coefficient of variation does not turn the score into NaN.
    pub(crate) fn score(&self, success_probability: f64, npv_norm: f64, cv: f64) -> f64 {
        let penalty = if self.dispersion == 0.0 {
            0.0
        } else {
            self.dispersion * cv
        };
        self.success * success_probability / 100.0 + self.npv * npv_norm - penalty
    }
}
