//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for scenario validation
//!
//! # Re-exports
//!
//! [`ValidationError`] is re-exported at this module level for convenience.

pub mod error;

pub use error::ValidationError;
