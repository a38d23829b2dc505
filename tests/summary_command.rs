//! Summary Command Tests
//!
//! Runs the `gradelens summary` binary end to end:
//! - stdout is exactly one JSON envelope
//! - structured logs go to stderr
//! - failures print an error envelope and exit non-zero

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

const DATASET: &str = "\
school,sex,age,studytime,failures,schoolsup,famsup,absences,G1,G2,G3
GP,F,18,2,0,yes,no,6,5,6,6
GP,F,17,2,0,no,yes,4,5,5,6
MS,M,15,2,3,yes,no,10,7,8,10
";

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("dados.csv");
    fs::write(&path, DATASET).expect("Failed to write dataset");
    path
}

fn summary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gradelens"))
        .arg("summary")
        .args(args)
        .output()
        .expect("run summary")
}

// =============================================================================
// Output contract
// =============================================================================

#[test]
fn test_stdout_is_a_single_json_document() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir);

    let output = summary(&["--data", path.to_str().unwrap(), "--school", "GP"]);
    assert!(output.status.success());

    // from_slice rejects trailing non-whitespace, so any log line fails here
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["status"], "ok");
    assert_eq!(document["data"]["views"]["total"], 2);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DATASET_LOADED"));
    assert!(stderr.contains("FILTER_APPLIED"));
}

#[test]
fn test_failure_prints_one_error_envelope() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");

    let output = summary(&["--data", missing.to_str().unwrap()]);
    assert!(!output.status.success());

    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["status"], "error");
    assert_eq!(document["code"], "GRADELENS_CLI_DATASET_ERROR");
}
