//! Per-trial pseudo-random number generator.
//!
//! This module provides [`TrialRng`], a seeded PRNG wrapper giving each
//! Monte Carlo trial an independent, reproducible stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Random number generator owned by a single trial.
///
/// # Examples
///
/// ```rust
/// use decision_engine::rng::TrialRng;
///
/// let mut a = TrialRng::for_trial(7, 3);
/// let mut b = TrialRng::for_trial(7, 3);
///
/// // Same base seed and trial index produce identical sequences
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// ```
pub struct TrialRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl TrialRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the generator for trial `trial_index` of a run with `base_seed`.
    ///
    /// The trial seed is `base_seed + trial_index` (wrapping). `seed_from_u64`
    /// expands it through a PCG step, so consecutive trial seeds still yield
    /// unrelated streams.
    #[inline]
    pub fn for_trial(base_seed: u64, trial_index: u64) -> Self {
        Self::from_seed(base_seed.wrapping_add(trial_index))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Generates a normal variate with the given mean and standard deviation.
    ///
    /// A standard deviation of zero returns `mean` exactly; one standard normal
    /// is still consumed so the stream layout does not depend on the parameters.
    #[inline]
    pub fn gen_normal_with(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z = self.gen_normal();
        if std_dev == 0.0 {
            mean
        } else {
            mean + std_dev * z
        }
    }
}

/// Draws a fresh base seed from operating-system entropy.
///
/// Intended for production runs; log the returned value so a run can be
/// replayed with [`TrialRng::for_trial`].
pub fn entropy_seed() -> u64 {
    rand::random()
}
