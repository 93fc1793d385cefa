//! # Random Number Generation Infrastructure
//!
//! Every Monte Carlo trial draws from its own generator, seeded from the
//! engine's base seed and the trial index. Trials therefore never share a
//! stream, and the sequence a trial sees does not depend on which worker thread
//! runs it or in which order trials are scheduled.
//!
//! ## Usage Example
//!
//! ```rust
//! use decision_engine::rng::TrialRng;
//!
//! // Trial 17 of a run seeded with 42
//! let mut rng = TrialRng::for_trial(42, 17);
//!
//! // Standard normal variate (mean=0, std=1)
//! let z = rng.gen_normal();
//!
//! // Normal variate with given mean and standard deviation
//! let revenue = rng.gen_normal_with(35_000.0, 8_000.0);
//! # let _ = (z, revenue);
//! ```

mod prng;

pub use prng::{entropy_seed, TrialRng};
