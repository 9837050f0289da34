use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_large_script_streaming() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("large_requests.csv");
    // 2000 requests per table: 2000 % 3 == 2, so every table ends on done
    common::generate_requests_csv(&output_path, 20_000, 10).expect("Failed to generate CSV");

    let mut cmd = Command::new(cargo_bin!("restaurant-ops"));
    cmd.arg(&output_path).arg("--sink").arg("store");

    let mut assert = cmd.assert().success();
    for table in 1..=10 {
        assert = assert.stdout(predicate::str::contains(format!("\n{table},done\n")));
    }
}

#[test]
fn test_mixed_script_has_no_rejected_rows() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("mixed.csv");
    common::generate_mixed_csv(&output_path, 5_000).expect("Failed to generate CSV");

    let mut cmd = Command::new(cargo_bin!("restaurant-ops"));
    cmd.arg(&output_path).arg("--sink").arg("store");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading event").not())
        .stdout(predicate::str::starts_with("table,status\n"));
}
