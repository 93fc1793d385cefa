//! Runs the `decision` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

fn decision(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_decision"))
        .current_dir(dir)
        .args(args)
        .env_remove("DECISION_TRIALS")
        .env_remove("DECISION_SEED")
        .env_remove("DECISION_HORIZON")
        .env_remove("DECISION_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run decision binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

const SIMULATE_ARGS: [&str; 18] = [
    "simulate",
    "--name",
    "Servicio Digital",
    "--investment",
    "50000",
    "--revenue-mean",
    "18000",
    "--revenue-std",
    "4000",
    "--cost-mean",
    "8000",
    "--cost-std",
    "1500",
    "--inflation",
    "0.02",
    "--volatility",
    "0.25",
    "--bins=5",
];

#[test]
fn simulate_json_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = SIMULATE_ARGS.to_vec();
    args.extend(["--trials", "1000", "--seed", "42", "--format", "json"]);

    let first = decision(dir.path(), &args);
    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
    let second = decision(dir.path(), &args);
    assert_eq!(stdout(&first), stdout(&second));

    let report: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    assert_eq!(report["trials"], 1000);
    assert_eq!(report["histogram"]["counts"].as_array().unwrap().len(), 5);
    let success = report["metrics"]["probabilidad_exito"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&success));
}

#[test]
fn compare_reads_configured_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("decision.toml"),
        r#"
trials = 500

[[scenarios]]
name = "A"
initial_investment = 10000.0
revenue_mean = 3000.0
revenue_std = 500.0
cost_mean = 1000.0
cost_std = 200.0
inflation_rate = 0.01
market_volatility = 0.1

[[scenarios]]
name = "B"
initial_investment = 10000.0
revenue_mean = 1500.0
revenue_std = 500.0
cost_mean = 1000.0
cost_std = 200.0
inflation_rate = 0.01
market_volatility = 0.1
"#,
    )
    .unwrap();

    let output = decision(dir.path(), &["compare", "--format", "csv"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("A,"));
    assert!(rows[2].starts_with("B,"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("decision.toml"), "trials = 0\n").unwrap();

    let output = decision(dir.path(), &["compare"]);
    assert!(!output.status.success());

    let output = decision(dir.path(), &["check"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Configuration: INVALID"));
}

#[test]
fn unknown_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = SIMULATE_ARGS.to_vec();
    args.extend(["--trials", "10", "--format", "xml"]);

    let output = decision(dir.path(), &args);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}
