use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("version"));
}

#[test]
fn format_of_prints_edifact_formats() {
    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .args(["format-of", "11042", "13002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11042\tUTILMD"))
        .stdout(predicate::str::contains("13002\tMSCONS"));
}

#[test]
fn format_of_rejects_malformed_pruefidentifikator() {
    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .args(["format-of", "1104"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid Pruefidentifikator '1104'"));
}

#[test]
fn conditions_command_writes_one_file_per_format() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("iftsta.json");
    fs::write(
        &input,
        r#"{"edifact_format": "IFTSTA", "conditions": [{"condition_key": "9", "condition_text": "nine"}]}"#,
    )
    .expect("input written");
    let output_dir = temp.path().join("out");

    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .arg("conditions")
        .arg("--input")
        .arg(&input)
        .arg("--output-path")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("conditions.json"));

    let written = fs::read_to_string(output_dir.join("IFTSTA").join("conditions.json"))
        .expect("output read");
    let parsed: serde_json::Value = serde_json::from_str(&written).expect("JSON parsed");
    assert_eq!(parsed["edifact_format"], "IFTSTA");
    assert_eq!(parsed["conditions"][0]["condition_text"], "nine");
}

#[test]
fn conditions_command_fails_for_missing_input() {
    let temp = TempDir::new().expect("tempdir");

    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .arg("conditions")
        .arg("--input")
        .arg(temp.path().join("nope.json"))
        .arg("--output-path")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn malformed_log_config_is_a_startup_error() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("logging.json");
    fs::write(&config, "{ not json").expect("config written");

    Command::cargo_bin("kohlrahbi")
        .expect("binary")
        .arg("--log-config")
        .arg(&config)
        .args(["format-of", "11042"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to initialise logging"));
}
