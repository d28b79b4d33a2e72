//! Tests for the `compare` command
//!
//! Drives the binary against snapshot files on disk.

use predicates::prelude::*;
use serde_json::Value;

mod common;
use common::fixtures::{self, SnapshotPair};
use common::get_bin;

fn compare(pair: &SnapshotPair) -> assert_cmd::Command {
    let mut cmd = get_bin();
    cmd.arg("--project-root")
        .arg(pair.root())
        .arg("compare")
        .arg(&pair.baseline)
        .arg(&pair.target);
    cmd
}

#[test]
fn test_compare_prints_table_by_default() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS).expect("Failed to create fixture");

    compare(&pair)
        .assert()
        .success()
        .stdout(predicate::str::contains("Modules (1)"))
        .stdout(predicate::str::contains("Pages (1)"))
        .stdout(predicate::str::contains("▲ +250 B (+25.00%)"))
        .stdout(predicate::str::contains("/getting-started"));
}

#[test]
fn test_compare_markdown_links_previews() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS).expect("Failed to create fixture");

    compare(&pair)
        .args(["--pr", "123", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Size comparison for #123"))
        .stdout(predicate::str::contains(":small_red_triangle:"))
        .stdout(predicate::str::contains(
            "[/getting-started](https://deploy-preview-123--lib.netlify.app/getting-started)",
        ));
}

#[test]
fn test_compare_json_is_machine_readable() {
    let pair = SnapshotPair::new(fixtures::ADDED_AND_REMOVED).expect("Failed to create fixture");

    let output = compare(&pair)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let main = value["main"].as_array().expect("main should be an array");
    assert_eq!(main.len(), 2);

    assert_eq!(main[0]["label"], "Fresh");
    assert!(main[0]["parsed"]["relative_diff"].is_null());
    assert_eq!(main[1]["label"], "Legacy");
    assert_eq!(main[1]["parsed"]["change"], "▼ -1 kB (-100.00%)");
    assert_eq!(main[1]["parsed"]["size"], "0 B");
}

#[test]
fn test_compare_unchanged_reports_no_changes() {
    let pair = SnapshotPair::new(fixtures::UNCHANGED).expect("Failed to create fixture");

    compare(&pair)
        .assert()
        .success()
        .stdout(predicate::str::contains("No size changes"))
        .stdout(predicate::str::contains("--"));
}

#[test]
fn test_compare_missing_target_explains_unfinished_build() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS)
        .and_then(SnapshotPair::without_target)
        .expect("Failed to create fixture");

    compare(&pair)
        .args(["--pr", "77"])
        .assert()
        .code(66)
        .stderr(predicate::str::contains("target snapshot not found"))
        .stderr(predicate::str::contains(
            "Could not load comparison for #77. This can happen if the CI build didn't finish yet.",
        ));
}

#[test]
fn test_compare_malformed_target_is_data_error() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS)
        .and_then(|p| p.with_target(r#"{ "a": { "parsed": -1, "gzip": 0 } }"#))
        .expect("Failed to create fixture");

    compare(&pair)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("malformed snapshot"))
        .stderr(predicate::str::contains("target.json"));
}

#[test]
fn test_compare_invalid_config_is_config_error() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS)
        .and_then(|p| p.with_config("[preview]\nurl-template = \"https://static.example\"\n"))
        .expect("Failed to create fixture");

    compare(&pair)
        .assert()
        .code(78)
        .stderr(predicate::str::contains("{pr}"));
}

#[test]
fn test_compare_uses_project_config() {
    let pair = SnapshotPair::new(fixtures::BUTTON_GROWS)
        .and_then(|p| {
            p.with_config(
                r#"
[classifier]
strip-suffixes = []

[preview]
url-template = "https://pr-{pr}.preview.example"
"#,
            )
        })
        .expect("Failed to create fixture");

    compare(&pair)
        .args(["--pr", "5", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Button.esm |"))
        .stdout(predicate::str::contains(
            "https://pr-5.preview.example/getting-started",
        ));
}
