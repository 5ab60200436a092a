use std::process::{Command, Output};

use serde_json::Value;

#[derive(Debug)]
struct Summary {
    committed_mw: f64,
    wind_share_pct: f64,
    marginal_unit: String,
    backtracked: bool,
}

#[test]
fn reference_payloads_run_via_cli_and_produce_distinct_plans() {
    let windy = run_and_parse_summary(&["--scenario", "scenarios/payload1.json"]);
    let calm = run_and_parse_summary(&["--scenario", "scenarios/payload2.json"]);
    let peak = run_and_parse_summary(&["--scenario", "scenarios/payload3.json"]);

    assert!((windy.committed_mw - 480.0).abs() < 0.05, "{windy:?}");
    assert!((calm.committed_mw - 480.0).abs() < 0.05, "{calm:?}");
    assert!((peak.committed_mw - 910.0).abs() < 0.05, "{peak:?}");

    assert!(
        windy.wind_share_pct > 20.0,
        "expected wind to cover part of payload1: {windy:?}"
    );
    assert_eq!(calm.wind_share_pct, 0.0);

    assert_eq!(windy.marginal_unit, "gasfiredbig1");
    assert_eq!(calm.marginal_unit, "gasfiredbig2");
    assert_eq!(peak.marginal_unit, "gasfiredbig2");

    assert!(calm.backtracked, "payload2 needs a backtrack: {calm:?}");
    assert!(!windy.backtracked && !peak.backtracked);
}

#[test]
fn carbon_config_file_runs_same_payload() {
    let summary = run_and_parse_summary(&[
        "--config",
        "scenarios/carbon.toml",
        "--scenario",
        "scenarios/payload3.json",
    ]);
    assert!((summary.committed_mw - 910.0).abs() < 0.05);
}

#[test]
fn json_flag_prints_response_body() {
    let output = run(&["--scenario", "scenarios/payload1.json", "--json"]);
    assert_success(&output);

    let body: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let rows = body.as_array().expect("body should be an array");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["name"], "windpark1");
    assert_eq!(rows[0]["p"], 90.0);
}

#[test]
fn out_flag_writes_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("plan.csv");
    let path_arg = path.to_string_lossy().into_owned();

    let output = run(&[
        "--scenario",
        "scenarios/payload2.json",
        "--out",
        path_arg.as_str(),
    ]);
    assert_success(&output);

    let csv = std::fs::read_to_string(&path).expect("CSV should be written");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("order,name,kind,p_mw"));
    assert_eq!(lines.next(), Some("0,windpark1,windturbine,0.0000"));
    assert_eq!(lines.next(), Some("1,windpark2,windturbine,0.0000"));
    assert_eq!(lines.next(), Some("2,gasfiredbig1,gasfired,360.0000"));
    assert_eq!(lines.next(), Some("3,gasfiredbig2,gasfired,120.0000"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn infeasible_payload_exits_with_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("overload.json");
    let payload = std::fs::read_to_string("scenarios/payload1.json")
        .expect("payload fixture should exist")
        .replace("\"load\": 480", "\"load\": 5000");
    std::fs::write(&path, payload).expect("write payload");
    let path_arg = path.to_string_lossy().into_owned();

    let output = run(&["--scenario", path_arg.as_str()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("capacity"),
        "stderr should explain the refusal: {stderr}"
    );
}

#[test]
fn unknown_preset_exits_with_error() {
    let output = run(&["--preset", "nuclear", "--scenario", "scenarios/payload1.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}

#[test]
fn missing_scenario_exits_with_error() {
    let output = run(&[]);
    assert!(!output.status.success());
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_merit-dispatch"))
        .args(args)
        .env_remove("MERIT_DISPATCH_SCENARIO")
        .env_remove("MERIT_DISPATCH_CONFIG")
        .env("RUST_LOG", "warn")
        .output()
        .expect("merit-dispatch process should run")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "run failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn run_and_parse_summary(args: &[&str]) -> Summary {
    let output = run(args);
    assert_success(&output);

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    parse_summary(&stdout)
}

fn parse_summary(stdout: &str) -> Summary {
    let committed_mw = parse_metric(stdout, "Load committed:", "MW");
    let wind = field(stdout, "Wind:");
    let wind_share_pct = wind
        .split_once('(')
        .and_then(|(_, right)| right.strip_suffix("%)"))
        .and_then(|pct| pct.trim().parse::<f64>().ok())
        .unwrap_or_else(|| panic!("invalid wind line `{wind}`"));

    Summary {
        committed_mw,
        wind_share_pct,
        marginal_unit: field(stdout, "Marginal unit:").to_string(),
        backtracked: field(stdout, "Backtrack adjustment:") == "true",
    }
}

fn field<'a>(stdout: &'a str, label: &str) -> &'a str {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing summary line `{label}` in output: {stdout}"));

    line.split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid summary format for line `{line}`"))
}

fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let raw = field(stdout, label);
    let numeric = raw.strip_suffix(unit).unwrap_or(raw).trim();
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from summary line `{label}`"))
}
