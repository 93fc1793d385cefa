//! Numeric routines used by the simulation engine and the risk calculator.
//!
//! Everything here is a plain, documented formula over `f64` slices so that the
//! engine's convenience percentiles and the calculator's independent
//! computations share a single definition.

pub mod statistics;
