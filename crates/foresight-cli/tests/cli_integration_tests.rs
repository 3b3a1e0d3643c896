//! CLI integration tests
//!
//! Run the built `foresight` binary and check stdout, stderr and exit codes.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn foresight(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_foresight"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_simulate_json_prints_requested_count() {
    let output = foresight(&["simulate", "--count", "3", "--json"]);
    let json = stdout_json(&output);

    let scenarios = json["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 3);
    assert!(json["seed"].is_u64());

    let probabilities: Vec<f64> = scenarios
        .iter()
        .map(|s| s["probability"].as_f64().unwrap())
        .collect();
    assert!(probabilities.windows(2).all(|w| w[0] >= w[1]));
    for s in scenarios {
        let action = s["recommended_action"].as_str().unwrap();
        assert!([
            "Expand product offerings aggressively.",
            "Reevaluate and strengthen existing safety measures.",
            "Maintain steady operations with close monitoring."
        ]
        .contains(&action));
    }
}

#[test]
fn test_simulate_zero_count_exits_with_error() {
    let output = foresight(&["simulate", "--count", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {}", stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"), "stderr was: {}", stderr);
}

#[test]
fn test_simulate_negative_count_exits_with_error() {
    let output = foresight(&["simulate", "--count", "-2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_simulate_huge_count_exits_with_error() {
    let output = foresight(&["simulate", "--count", "9223372036854775807"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"), "stderr was: {}", stderr);
}

#[test]
fn test_simulate_seed_is_reproducible() {
    let a = stdout_json(&foresight(&["simulate", "--seed", "42", "--json"]));
    let b = stdout_json(&foresight(&["simulate", "--seed", "42", "--json"]));

    assert_eq!(a, b);
    assert_eq!(a["seed"], 42);
    assert_eq!(a["scenarios"].as_array().unwrap().len(), 10);
}

#[test]
fn test_simulate_top_limits_output() {
    let json = stdout_json(&foresight(&["simulate", "--count", "8", "--top", "2", "--json"]));
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 2);
}

#[test]
fn test_simulate_human_output() {
    let output = foresight(&["simulate", "--count", "2", "--seed", "5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seed 5"));
    assert!(stdout.contains("Scenario 1: Probability"));
    assert!(stdout.contains("Scenario 2: Probability"));
    assert!(!stdout.contains("Scenario 3"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("foresight.toml");
    fs::write(
        &config_path,
        r#"
        [simulation]
        default_count = 4
        seed = 9

        [logging]
        profile = "test"

        [[memory]]
        scenario = "regulatory change"
        strategy = "Engage compliance early"
        "#,
    )
    .unwrap();
    let config = config_path.to_str().unwrap();

    let json = stdout_json(&foresight(&["--config", config, "simulate", "--json"]));
    assert_eq!(json["seed"], 9);
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 4);

    let json = stdout_json(&foresight(&[
        "--config",
        config,
        "recall",
        "--json",
        "a regulatory change in the EU",
    ]));
    assert_eq!(json[0]["strategy"], "Engage compliance early");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("foresight.toml");
    fs::write(&config_path, "[simulation]\ndefault_count = 0\n").unwrap();

    let output = foresight(&["--config", config_path.to_str().unwrap(), "simulate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_missing_config_exits_with_error() {
    let output = foresight(&["--config", "/nonexistent/foresight.toml", "lead"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_recall_matches_and_misses() {
    let json = stdout_json(&foresight(&["recall", "--json", "A sudden economic downturn in Q3"]));
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["scenario"], "economic downturn");

    let output = foresight(&["recall", "Economic Downturn"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No relevant past decisions."));
}

#[test]
fn test_lead_defaults_and_fallback() {
    let json = stdout_json(&foresight(&["lead", "--json"]));
    assert_eq!(json["style"], "Reed");
    assert_eq!(json["decision"], "Invest heavily in emerging technologies and innovation.");

    let json = stdout_json(&foresight(&["lead", "reed", "--json"]));
    assert_eq!(json["decision"], "default strategy");

    let output = foresight(&["lead", "--list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "Reed"));
}

#[test]
fn test_advise_is_case_insensitive() {
    let json = stdout_json(&foresight(&["advise", "GROWTH", "--json"]));
    assert_eq!(json["advice"], "Consider improving customer experience to foster organic growth.");

    let json = stdout_json(&foresight(&["advise", "weather", "--json"]));
    assert_eq!(json["advice"], "Let's explore this topic in more detail.");
}

#[test]
fn test_advise_requires_topic_or_list() {
    let output = foresight(&["advise"]);
    assert!(!output.status.success());

    let output = foresight(&["advise", "--list", "--json"]);
    let json = stdout_json(&output);
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t == "customer loyalty"));
}
