//! Error types for risk analytics.

use thiserror::Error;

/// Error raised while configuring risk analytics.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum RiskError {
    /// Scoring weight not finite or negative.
    #[error("Invalid scoring weight '{name}': {value} (must be finite and non-negative)")]
    InvalidWeight {
        /// Weight name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weight_display() {
        let err = RiskError::InvalidWeight {
            name: "dispersion",
            value: -0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("dispersion"));
        assert!(msg.contains("-0.5"));
    }
}
