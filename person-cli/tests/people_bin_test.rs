//! End-to-end tests for the `people` binary.
//!
//! Runs the built executable with logging enabled and checks that stdout carries only command output.

use std::process::{Command, Output};

fn run_people(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_people"))
        .args(args)
        .env("RUST_LOG", "debug")
        .env_remove("PEOPLE_OUTPUT")
        .env_remove("PEOPLE_LOG_FILE")
        .output()
        .expect("Failed to run people")
}

/// **Test: `list --json` prints one JSON object per line and nothing else on stdout.**
///
/// **Setup:** Debug logging enabled via `RUST_LOG`.
/// **Action:** `people list --json`.
/// **Expected:** Exit success; four stdout lines, each a JSON person; log output goes to stderr.
#[test]
fn test_list_json_stdout_is_parseable() {
    let output = run_people(&["list", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let people: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("Line {:?} is not JSON: {}", line, e))
        })
        .collect();

    assert_eq!(people.len(), 4);
    assert_eq!(people[1]["firstName"], "Fiona");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Listed persons"));
}

/// **Test: `get 8 --json` prints `null` and exits successfully.**
///
/// **Setup:** Debug logging enabled via `RUST_LOG`.
/// **Action:** `people get 8 --json`.
/// **Expected:** Exit success; stdout is exactly `null`.
#[test]
fn test_get_missing_json_stdout() {
    let output = run_people(&["get", "8", "--json"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

/// **Test: `get 8 --strict` fails.**
///
/// **Setup:** Default repository.
/// **Action:** `people get 8 --strict`.
/// **Expected:** Non-zero exit and empty stdout.
#[test]
fn test_get_missing_strict_fails() {
    let output = run_people(&["get", "8", "--strict"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
