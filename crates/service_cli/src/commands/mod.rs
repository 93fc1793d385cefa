//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to any `std::io::Write` so they can be exercised against a buffer.

pub mod check;
pub mod compare;
pub mod demo;
pub mod simulate;
