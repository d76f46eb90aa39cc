//! Integration tests for CLI argument handling and error reporting.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_help_lists_positional_arguments() {
    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DIRECTORY"))
        .stdout(predicate::str::contains("Detection threshold"));
}

#[test]
fn test_missing_directory_fails() {
    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.args([
        "/no/such/directory",
        "out.csv",
        "0.5",
        "--model-path",
        "model.onnx",
        "--labels-path",
        "labels.txt",
        "-q",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_empty_directory_fails_with_no_audio_files() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.args([
        dir.path().to_str().unwrap(),
        "out.csv",
        "0.5",
        "--model-path",
        "model.onnx",
        "--labels-path",
        "labels.txt",
        "-q",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no valid audio files"));
}

#[test]
fn test_missing_model_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("night_20230615_230045.wav"), b"not audio").unwrap();

    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.args([
        dir.path().to_str().unwrap(),
        "out.csv",
        "0.5",
        "--model-path",
        "/no/such/model.onnx",
        "--labels-path",
        "/no/such/labels.txt",
        "-q",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("model file does not exist"));
}

#[test]
fn test_out_of_range_threshold_rejected_at_parse_time() {
    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.args([".", "out.csv", "2.0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be between"));
}

#[test]
fn test_config_path_subcommand() {
    let mut cmd = Command::new(cargo_bin("batscan"));
    cmd.args(["config", "path"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
