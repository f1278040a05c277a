//! Integration tests for the lyrsync command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_fixture};

/// lyrsync command with its config directory pointed at an empty temp dir.
fn lyrsync(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lyrsync").expect("lyrsync binary is built");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("LYRSYNC_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn timeline_prints_normalized_lrc() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = temp_fixture("sample.lrc");

    let output = lyrsync(&home).arg("timeline").arg(&path).output().unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    [00:00.00]♪
    [00:01.50]first
    [00:02.50]second
    [00:03.50]second again
    [00:05.00]third
    ");
}

#[test]
fn timeline_json_is_an_array_of_lines() {
    let home = TempDir::new().unwrap();
    let output = lyrsync(&home)
        .args(["timeline", "--json"])
        .arg(fixtures_dir().join("crlf.lrc"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = value.as_array().unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3]["timestamp"], 5.0);
    assert_eq!(lines[3]["text"], "d");
}

#[test]
fn timeline_of_untagged_file_prints_text_with_notice() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .arg("timeline")
        .arg(fixtures_dir().join("plain.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Just some words"))
        .stdout(predicate::str::contains("at all"))
        .stderr(predicate::str::contains("No synchronized lyrics"));
}

#[test]
fn timeline_of_missing_file_fails() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["timeline", "/nonexistent/song.lrc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read lyrics file"));
}

#[test]
fn play_runs_to_the_last_line_without_a_terminal() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["play", "--speed", "16", "--duration", "6"])
        .arg(fixtures_dir().join("sample.lrc"))
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:00.00] ♪"))
        .stdout(predicate::str::contains("[00:05.00] third"));
}

#[test]
fn play_from_offset_starts_at_that_line() {
    let home = TempDir::new().unwrap();
    let output = lyrsync(&home)
        .args(["play", "--speed", "16", "--start", "4.9", "--duration", "6"])
        .arg(fixtures_dir().join("sample.lrc"))
        .timeout(std::time::Duration::from_secs(20))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("first"), "unexpected output: {}", stdout);
    assert!(stdout.contains("[00:03.50] second again"));
    assert!(stdout.contains("[00:05.00] third"));
}

#[test]
fn play_rejects_zero_speed() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["play", "--speed", "0"])
        .arg(fixtures_dir().join("sample.lrc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--speed must be a positive number"));
}

#[test]
fn config_path_points_into_config_dir() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lyrsync"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[timeline]"))
        .stdout(predicate::str::contains("linear_scan_threshold = 16"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    lyrsync(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lyrsync"));
}
