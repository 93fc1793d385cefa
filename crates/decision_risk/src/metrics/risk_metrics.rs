use std::collections::BTreeMap;

use decision_core::math::statistics::{
    excess_kurtosis, mean, percentage, sample_std_dev, skewness,
};
use decision_engine::mc::SimulationResult;
use serde::Serialize;

/// Metric keys in display order.
pub const METRIC_KEYS: [&str; 13] = [
    "media_npv",
    "desviacion_std",
    "probabilidad_exito",
    "roi_medio",
    "var_95",
    "cvar_95",
    "coeficiente_variacion",
    "asimetria",
    "curtosis",
    "break_even_medio",
    "prob_roi_positivo",
    "prob_break_even_6m",
    "prob_break_even_12m",
];

/// Keys of the percentage metrics, each in `[0, 100]`.
pub const PROBABILITY_KEYS: [&str; 4] = [
    "probabilidad_exito",
    "prob_roi_positivo",
    "prob_break_even_6m",
    "prob_break_even_12m",
];

/// Named risk metrics of one simulation.
///
/// Serialises with the keys listed in [`METRIC_KEYS`]. Non-finite values
/// (see the module table) serialise as `null` in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// Mean NPV.
    #[serde(rename = "media_npv")]
    pub mean_npv: f64,
    /// Sample standard deviation of NPV (N−1 denominator, 0 for one trial).
    #[serde(rename = "desviacion_std")]
    pub std_npv: f64,
    /// Percentage of trials with NPV > 0.
    #[serde(rename = "probabilidad_exito")]
    pub success_probability: f64,
    /// Mean ROI, in percent.
    #[serde(rename = "roi_medio")]
    pub mean_roi: f64,
    /// Loss at the 5th NPV percentile, `max(0, -P5)`.
    pub var_95: f64,
    /// Mean loss of the trials at or below the 5th NPV percentile.
    pub cvar_95: f64,
    /// `std_npv / |mean_npv|`.
    #[serde(rename = "coeficiente_variacion")]
    pub coefficient_of_variation: f64,
    /// Third standardised central moment of NPV.
    #[serde(rename = "asimetria")]
    pub skewness: f64,
    /// Excess kurtosis of NPV (Normal = 0).
    #[serde(rename = "curtosis")]
    pub kurtosis: f64,
    /// Mean break-even month over the trials that break even.
    #[serde(rename = "break_even_medio")]
    pub mean_break_even: f64,
    /// Percentage of trials with ROI > 0.
    #[serde(rename = "prob_roi_positivo")]
    pub roi_positive_probability: f64,
    /// Percentage of trials breaking even by month 6.
    #[serde(rename = "prob_break_even_6m")]
    pub breakeven_within_6m_probability: f64,
    /// Percentage of trials breaking even by month 12.
    #[serde(rename = "prob_break_even_12m")]
    pub breakeven_within_12m_probability: f64,
    /// Trials that never break even within the horizon.
    #[serde(skip)]
    pub trials_without_break_even: usize,
}

impl RiskMetrics {
    /// Computes every metric from a simulation result.
    pub fn from_result(result: &SimulationResult) -> Self {
        let npv = result.net_present_values();
        let roi = result.roi_values();
        let months = result.break_even_months();
        let n = npv.len();

        let mean_npv = mean(npv);
        let std_npv = sample_std_dev(npv);

        let p5 = result.percentile_5();
        let var_95 = (-p5).max(0.0);
        let tail: Vec<f64> = npv.iter().copied().filter(|&x| x <= p5).collect();
        // Every tail value is <= P5, so this only absorbs rounding in the mean
        let cvar_95 = var_95.max((-mean(&tail)).max(0.0));

        let coefficient_of_variation = if mean_npv == 0.0 {
            f64::INFINITY
        } else {
            std_npv / mean_npv.abs()
        };

        let reached: Vec<f64> = months.iter().flatten().map(|&m| f64::from(m)).collect();
        let within = |limit: u32| months.iter().filter(|m| matches!(m, Some(v) if *v <= limit)).count();

        Self {
            mean_npv,
            std_npv,
            success_probability: percentage(npv.iter().filter(|&&x| x > 0.0).count(), n),
            mean_roi: mean(roi),
            var_95,
            cvar_95,
            coefficient_of_variation,
            skewness: skewness(npv),
            kurtosis: excess_kurtosis(npv),
            mean_break_even: mean(&reached),
            roi_positive_probability: percentage(roi.iter().filter(|&&x| x > 0.0).count(), n),
            breakeven_within_6m_probability: percentage(within(6), n),
            breakeven_within_12m_probability: percentage(within(12), n),
            trials_without_break_even: n - reached.len(),
        }
    }

    /// Looks up a metric by its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use decision_risk::RiskMetrics;
    ///
    /// let metrics = RiskMetrics { var_95: 1_500.0, ..Default::default() };
    /// assert_eq!(metrics.get("var_95"), Some(1_500.0));
    /// assert_eq!(metrics.get("unknown"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "media_npv" => self.mean_npv,
            "desviacion_std" => self.std_npv,
            "probabilidad_exito" => self.success_probability,
            "roi_medio" => self.mean_roi,
            "var_95" => self.var_95,
            "cvar_95" => self.cvar_95,
            "coeficiente_variacion" => self.coefficient_of_variation,
            "asimetria" => self.skewness,
            "curtosis" => self.kurtosis,
            "break_even_medio" => self.mean_break_even,
            "prob_roi_positivo" => self.roi_positive_probability,
            "prob_break_even_6m" => self.breakeven_within_6m_probability,
            "prob_break_even_12m" => self.breakeven_within_12m_probability,
            _ => return None,
        };
        Some(value)
    }

    /// Returns `(key, value)` pairs in [`METRIC_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        METRIC_KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    /// Returns the metrics as a key-sorted map.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.entries().into_iter().collect()
    }

    /// Returns the four percentage metrics in [`PROBABILITY_KEYS`] order.
    pub fn probabilities(&self) -> [(&'static str, f64); 4] {
        [
            (PROBABILITY_KEYS[0], self.success_probability),
            (PROBABILITY_KEYS[1], self.roi_positive_probability),
            (PROBABILITY_KEYS[2], self.breakeven_within_6m_probability),
            (PROBABILITY_KEYS[3], self.breakeven_within_12m_probability),
        ]
    }
}

impl From<&SimulationResult> for RiskMetrics {
    fn from(result: &SimulationResult) -> Self {
        Self::from_result(result)
    }
}
