//! Cross-scenario attractiveness ranking.
//!
//! Each scenario receives
//!
//! ```text
//! score_atractivo = w_success    * probabilidad_exito / 100
//!                 + w_npv        * minmax(media_npv)
//!                 - w_dispersion * coeficiente_variacion
//! ```
//!
//! where `minmax` rescales mean NPV linearly onto `[0, 1]` across the compared
//! set (every scenario gets `0.5` when all means are equal). Rows are sorted
//! by descending score, then descending success probability, then descending
//! mean NPV; rows equal on all three keep their input order.

mod table;
mod weights;

pub use table::{RankedScenario, ScenarioRanking};
pub use weights::ScoringWeights;
