//! Risk metrics over a simulated NPV population.
//!
//! All metrics are computed from the three per-trial vectors of a
//! [`SimulationResult`](decision_engine::mc::SimulationResult). Degenerate
//! inputs never raise errors; they produce documented sentinels instead:
//!
//! | Metric | Sentinel | When |
//! |--------|----------|------|
//! | `coeficiente_variacion` | `+∞` | mean NPV is exactly zero |
//! | `asimetria`, `curtosis` | NaN | fewer than 3 trials or zero variance |
//! | `break_even_medio` | NaN | no trial breaks even |

mod risk_metrics;

pub use risk_metrics::{RiskMetrics, METRIC_KEYS, PROBABILITY_KEYS};
