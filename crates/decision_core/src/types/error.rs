//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Errors from scenario construction

use thiserror::Error;

/// Scenario validation errors.
///
/// Raised when a [`Scenario`](crate::scenario::Scenario) is constructed from
/// parameters that violate its invariants. Every variant names the offending
/// field so callers can point the user at the input that needs fixing.
///
/// # Variants
/// - `EmptyName`: Scenario name is empty or whitespace
/// - `NonFinite`: A numeric field is NaN or infinite
/// - `NotPositive`: A field that must be strictly positive is not
/// - `Negative`: A field that must be non-negative is negative
/// - `OutOfRange`: A field lies outside its admissible interval
///
/// # Examples
/// ```
/// use decision_core::types::ValidationError;
///
/// let err = ValidationError::NotPositive { field: "initial_investment", value: 0.0 };
/// assert_eq!(err.field(), "initial_investment");
/// assert!(format!("{}", err).contains("must be strictly positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scenario name is empty.
    #[error("Invalid field 'name': must not be empty")]
    EmptyName,

    /// Numeric field is NaN or infinite.
    #[error("Invalid field '{field}': value {value} is not finite")]
    NonFinite {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Field must be strictly positive.
    #[error("Invalid field '{field}': value {value} must be strictly positive")]
    NotPositive {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Field must be non-negative.
    #[error("Invalid field '{field}': value {value} must be non-negative")]
    Negative {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Field lies outside its admissible interval.
    #[error("Invalid field '{field}': value {value} {constraint}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
        /// Human-readable constraint
        constraint: &'static str,
    },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NonFinite { field, .. }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::EmptyName;
        assert_eq!(format!("{}", err), "Invalid field 'name': must not be empty");

        let err = ValidationError::Negative {
            field: "revenue_std",
            value: -1.0,
        };
        assert!(format!("{}", err).contains("revenue_std"));
        assert!(format!("{}", err).contains("non-negative"));
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::EmptyName.field(), "name");
        assert_eq!(
            ValidationError::NonFinite {
                field: "cost_mean",
                value: f64::NAN
            }
            .field(),
            "cost_mean"
        );
        assert_eq!(
            ValidationError::OutOfRange {
                field: "inflation_rate",
                value: -1.0,
                constraint: "must be greater than -1",
            }
            .field(),
            "inflation_rate"
        );
    }
}
