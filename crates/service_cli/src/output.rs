//! Output formatting shared by the commands.

use std::io::Write;
use std::str::FromStr;

use decision_risk::{RiskMetrics, ScenarioRanking, METRIC_KEYS};
use serde::Serialize;

use crate::{CliError, Result};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Display label of a metric key.
pub fn metric_label(key: &str) -> &'static str {
    match key {
        "media_npv" => "Mean NPV",
        "desviacion_std" => "NPV std deviation",
        "probabilidad_exito" => "Success probability",
        "roi_medio" => "Mean ROI",
        "var_95" => "VaR 95%",
        "cvar_95" => "CVaR 95%",
        "coeficiente_variacion" => "Coefficient of variation",
        "asimetria" => "Skewness",
        "curtosis" => "Excess kurtosis",
        "break_even_medio" => "Mean break-even",
        "prob_roi_positivo" => "P(ROI > 0)",
        "prob_break_even_6m" => "P(break-even <= 6m)",
        "prob_break_even_12m" => "P(break-even <= 12m)",
        _ => "Unknown metric",
    }
}

/// Formats a metric value according to its unit.
pub fn format_metric(key: &str, value: f64) -> String {
    match key {
        "media_npv" | "desviacion_std" | "var_95" | "cvar_95" => format_money(value),
        "probabilidad_exito" | "roi_medio" | "prob_roi_positivo" | "prob_break_even_6m"
        | "prob_break_even_12m" => format_percent(value),
        "break_even_medio" if value.is_finite() => format!("{:.1} months", value),
        _ => format_number(value, 3),
    }
}

/// Formats a currency amount as `$1,234,567` (rounded to whole units).
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value, 0);
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a percentage with one decimal.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value)
    } else {
        format_number(value, 1)
    }
}

fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Renders rows as a box-drawn table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Renders every metric as a two-column table.
pub fn metrics_table(metrics: &RiskMetrics) -> String {
    let rows: Vec<Vec<String>> = metrics
        .entries()
        .into_iter()
        .map(|(key, value)| vec![metric_label(key).to_string(), format_metric(key, value)])
        .collect();
    render_table(&["Metric", "Value"], &rows)
}

/// Renders a ranking with its headline metrics.
pub fn ranking_table(ranking: &ScenarioRanking) -> String {
    let rows: Vec<Vec<String>> = ranking
        .iter()
        .enumerate()
        .map(|(i, row)| {
            vec![
                (i + 1).to_string(),
                row.scenario_name.clone(),
                format_number(row.score_atractivo, 3),
                format_money(row.metrics.mean_npv),
                format_percent(row.metrics.success_probability),
                format_percent(row.metrics.mean_roi),
                format_money(row.metrics.var_95),
            ]
        })
        .collect();
    render_table(
        &["#", "Scenario", "Score", "Mean NPV", "Success", "Mean ROI", "VaR 95%"],
        &rows,
    )
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes metrics as `metric,value` CSV rows.
pub fn write_metrics_csv<W: Write>(writer: W, metrics: &RiskMetrics) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["metric", "value"])?;
    for (key, value) in metrics.entries() {
        csv.write_record([key, value.to_string().as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes a ranking as CSV, one row per scenario with every metric.
pub fn write_ranking_csv<W: Write>(writer: W, ranking: &ScenarioRanking) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["escenario", "score_atractivo"];
    header.extend(METRIC_KEYS);
    csv.write_record(&header)?;

    for row in ranking {
        let mut record = vec![row.scenario_name.clone(), row.score_atractivo.to_string()];
        record.extend(row.metrics.entries().into_iter().map(|(_, v)| v.to_string()));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use decision_risk::ScoringWeights;

    fn sample_ranking() -> ScenarioRanking {
        let metrics = RiskMetrics {
            mean_npv: 390_000.0,
            success_probability: 100.0,
            coefficient_of_variation: 0.15,
            ..Default::default()
        };
        ScenarioRanking::build(
            vec![("Premium".to_string(), metrics)],
            &ScoringWeights::default(),
        )
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Unknown format: xml"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.4), "$999");
        assert_eq!(format_money(1_000.0), "$1,000");
        assert_eq!(format_money(390_123.6), "$390,124");
        assert_eq!(format_money(-1_234_567.0), "-$1,234,567");
        assert_eq!(format_money(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_metric_units() {
        assert_eq!(format_metric("probabilidad_exito", 97.26), "97.3%");
        assert_eq!(format_metric("break_even_medio", 9.04), "9.0 months");
        assert_eq!(format_metric("break_even_medio", f64::NAN), "n/a");
        assert_eq!(format_metric("coeficiente_variacion", f64::INFINITY), "inf");
        assert_eq!(format_metric("asimetria", 0.12345), "0.123");
    }

    #[test]
    fn test_render_table() {
        let table = render_table(
            &["Key", "Value"],
            &[vec!["a".to_string(), "1".to_string()], vec!["long".to_string(), "22".to_string()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌──────┬───────┐");
        assert_eq!(lines[1], "│ Key  │ Value │");
        assert_eq!(lines[3], "│ a    │ 1     │");
        assert_eq!(lines[5], "└──────┴───────┘");
    }

    #[test]
    fn test_metrics_table_lists_every_metric() {
        let table = metrics_table(&RiskMetrics::default());
        // Borders, header and separator plus one line per metric
        assert_eq!(table.lines().count(), 4 + METRIC_KEYS.len());
        assert!(table.contains("CVaR 95%"));
    }

    #[test]
    fn test_ranking_csv() {
        let mut buffer = Vec::new();
        write_ranking_csv(&mut buffer, &sample_ranking()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(header.len(), 2 + METRIC_KEYS.len());
        assert_eq!(header[0], "escenario");
        assert_eq!(header[2], "media_npv");

        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(row[0], "Premium");
        assert_eq!(row[2], "390000");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_metrics_csv_and_json() {
        let metrics = sample_ranking().rows()[0].metrics;

        let mut csv_out = Vec::new();
        write_metrics_csv(&mut csv_out, &metrics).unwrap();
        let text = String::from_utf8(csv_out).unwrap();
        assert_eq!(text.lines().count(), 1 + METRIC_KEYS.len());
        assert!(text.contains("probabilidad_exito,100"));

        let mut json_out = Vec::new();
        write_json(&mut json_out, &metrics).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
        assert_eq!(value["media_npv"], 390_000.0);
    }
}
