//! CLI integration tests
//!
//! These tests run the built binary against difference set files written to a
//! temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_fixture(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn sample_set(temp_dir: &TempDir) -> PathBuf {
    write_fixture(
        temp_dir,
        "diff.json",
        r#"{
            "baseDifferences": [
                {"id": 1, "type": "text", "changeType": "added", "compareText": "new clause"},
                {"id": 2, "type": "image", "changeType": "modified", "imageName": "logo.png",
                 "bounds": {"width": 100, "height": 50}}
            ],
            "compareDifferences": [
                {"id": 1, "type": "text", "changeType": "added"},
                {"id": 3, "type": "watermark"}
            ]
        }"#,
    )
}

fn run(args: &[&str]) -> Output {
    run_with_log(args, "off")
}

fn run_with_log(args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docdiff-cli"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_legend_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["legend", file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("**Unique differences**: 3"));
    assert!(stdout.contains("- Added: 1"));
    assert!(stdout.contains("- Modified: 1"));
    assert!(stdout.contains("- Text: 1"));
    assert!(stdout.contains("- Image: 1"));
    assert!(!stdout.contains("watermark"));
}

#[test]
fn test_cli_legend_all_categories() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["legend", file.to_str().unwrap(), "--all-categories"]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- watermark: 1"));
}

#[test]
fn test_cli_legend_json() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["legend", file.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["legend"]["counts"]["added"], 1);
    assert_eq!(value["legend"]["counts"]["style"], 0);
    assert_eq!(value["legend"]["unique_records"], 3);
    assert!(value["comparison_id"].is_string());
}

#[test]
fn test_cli_legend_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);
    let config = write_fixture(&temp_dir, "legend.toml", "title = \"Changes\"\nhide_zero = true\n");

    let output = run(&[
        "legend",
        file.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("## Changes"));
    assert!(!stdout.contains("Deleted"));
}

#[test]
fn test_cli_detail_image() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["detail", file.to_str().unwrap(), "--id", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Image modified\nName: logo.png\nSize: 100x50\n");
}

#[test]
fn test_cli_detail_hidden_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["detail", file.to_str().unwrap(), "--id", "1", "--hidden"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_detail_json_carries_position() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&[
        "detail",
        file.to_str().unwrap(),
        "--id",
        "3",
        "--x",
        "15.5",
        "--y",
        "-4",
        "--json",
    ]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["content"]["header"], "watermark Difference");
    assert_eq!(value["content"]["kind"], "other");
    assert_eq!(value["position"]["x"], 15.5);
    assert_eq!(value["position"]["y"], -4.0);
}

#[test]
fn test_cli_detail_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["detail", file.to_str().unwrap(), "--id", "99"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_NOT_FOUND"));
}

#[test]
fn test_cli_list_is_deduplicated() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_set(&temp_dir);

    let output = run(&["list", file.to_str().unwrap()]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["1\ttext\tadded", "2\timage\tmodified", "3\twatermark\t-"]
    );
}

#[test]
fn test_cli_invalid_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(&temp_dir, "bad.json", "[1, 2, 3]");

    let output = run(&["legend", file.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_INVALID_DIFFERENCE_SET"));
}

#[test]
fn test_cli_skipped_records_are_logged_not_printed() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(
        &temp_dir,
        "partial.json",
        r#"{"baseDifferences": [{"id": 1, "type": "text"}, 17]}"#,
    );

    let quiet = run(&["legend", file.to_str().unwrap()]);
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());

    let logged = run_with_log(&["legend", file.to_str().unwrap()], "warn");
    assert!(logged.status.success());
    let stderr = String::from_utf8(logged.stderr).unwrap();
    assert!(stderr.contains("skipping undecodable difference record"));
    assert!(stderr.contains("baseDifferences"));
}

#[test]
fn test_cli_malformed_detail_field_keeps_record_in_legend() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(
        &temp_dir,
        "lenient.json",
        r#"{"baseDifferences": [{"id": 1, "type": "font", "changeType": "modified", "fontName": 12}]}"#,
    );

    let output = run(&["legend", file.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["legend"]["counts"]["font"], 1);
    assert_eq!(value["legend"]["counts"]["modified"], 1);
    assert_eq!(value["skipped"].as_array().unwrap().len(), 0);
    assert_eq!(value["dropped_fields"][0]["field"], "fontName");
}
