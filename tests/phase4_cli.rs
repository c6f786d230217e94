//! Phase 4 tests: the `sgraph` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

// ==================== CLI Helpers ====================

/// Locate the `sgraph` binary built for this test run.
fn sgraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sgraph"))
}

/// Run the `sgraph` CLI with the given arguments and return the output.
fn run_sgraph(args: &[&str]) -> Output {
    Command::new(sgraph_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "sgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: get stderr as a string from an Output.
fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout)
        .expect("stdout should be JSON")
}

fn step_labels(walk: &Value) -> Vec<String> {
    walk["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap().to_string())
        .collect()
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_walk_text() {
    let output = run_sgraph(&["walk", "--from", "a", "--limit", "4", "a-b", "a>c"]);
    assert_success(&output);

    let stdout = stdout_str(&output);
    let lines: Vec<&str> = stdout.lines().map(str::trim).collect();
    assert_eq!(
        lines,
        vec!["0  a", "1  b", "2  c", "3  a", "(stopped after 4 steps)"]
    );
}

#[test]
fn test_cli_walk_text_finished_at_limit() {
    let output = run_sgraph(&["walk", "--from", "a", "--limit", "2", "a>b"]);
    assert_success(&output);

    let stdout = stdout_str(&output);
    assert!(!stdout.contains("stopped"), "unexpected marker:\n{}", stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_cli_walk_json() {
    let output = run_sgraph(&[
        "--format", "json", "walk", "--from", "a", "--order", "stack", "--limit", "2", "a>b",
    ]);
    assert_success(&output);

    let walk = stdout_json(&output);
    assert_eq!(walk["order"], "stack");
    assert_eq!(walk["truncated"], false);
    assert_eq!(step_labels(&walk), vec!["a", "b"]);
    assert_eq!(walk["steps"][1]["id"], 1);
}

#[test]
fn test_cli_walk_json_distinct_cycle() {
    let output = run_sgraph(&[
        "--format", "json", "walk", "--from", "a", "--distinct", "a-b", "b-c", "c-a",
    ]);
    assert_success(&output);

    let walk = stdout_json(&output);
    assert_eq!(walk["distinct"], true);
    assert_eq!(walk["truncated"], false);
    assert_eq!(step_labels(&walk), vec!["a", "b", "c"]);
}

#[test]
fn test_cli_walk_isolated_vertex() {
    let output = run_sgraph(&["--format", "json", "walk", "--from", "x", "x", "y"]);
    assert_success(&output);

    let walk = stdout_json(&output);
    assert_eq!(step_labels(&walk), vec!["x"]);
    assert_eq!(walk["truncated"], false);
}

#[test]
fn test_cli_neighbors() {
    let output = run_sgraph(&["--format", "json", "neighbors", "a", "a-b:3", "a>c", "d>a"]);
    assert_success(&output);

    let info = stdout_json(&output);
    assert_eq!(info["neighbors"], serde_json::json!(["b", "c"]));
    assert_eq!(info["outgoing"].as_array().unwrap().len(), 2);
    assert_eq!(info["incoming"].as_array().unwrap().len(), 2);
    assert_eq!(info["outgoing"][0]["kind"], "undirected");
    assert_eq!(info["outgoing"][0]["weight"], 3);
    assert_eq!(info["outgoing"][1]["kind"], "directed");

    let text = run_sgraph(&["neighbors", "a", "a-b", "a>c"]);
    assert_success(&text);
    assert!(stdout_str(&text).contains("Neighbors: b, c"));
}

#[test]
fn test_cli_info() {
    let output = run_sgraph(&["--format", "json", "info", "a-b", "a>c", "lonely"]);
    assert_success(&output);

    let info = stdout_json(&output);
    assert_eq!(info["vertices"], 4);
    assert_eq!(info["edges"], 2);
    assert_eq!(info["directed"], 1);
    assert_eq!(info["undirected"], 1);
    assert_eq!(info["config"]["undirected_weight"], "keep");

    let text = run_sgraph(&["info", "a-b", "a>c"]);
    assert_success(&text);
    let stdout = stdout_str(&text);
    assert!(stdout.contains("Vertices: 3"));
    assert!(stdout.contains("Edges: 2"));
}

#[test]
fn test_cli_discard_undirected_weights() {
    let output = run_sgraph(&[
        "--format",
        "json",
        "--discard-undirected-weights",
        "neighbors",
        "a",
        "a-b:5",
        "a>c:5",
    ]);
    assert_success(&output);

    let info = stdout_json(&output);
    assert_eq!(info["outgoing"][0]["weight"], 0);
    assert_eq!(info["outgoing"][1]["weight"], 5);
}

#[test]
fn test_cli_invalid_spec_exit_code() {
    let output = run_sgraph(&["walk", "--from", "a", "a-"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_str(&output).contains("Invalid edge spec"));

    let output = run_sgraph(&["info", "a-b:heavy"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_unknown_origin_exit_code() {
    let output = run_sgraph(&["walk", "--from", "zz", "a-b"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr_str(&output).contains("Unknown vertex label: zz"));

    let output = run_sgraph(&["neighbors", "zz", "a-b"]);
    assert_eq!(output.status.code(), Some(4));
}
