//! Command line behavior

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn seekbar() -> Command {
    Command::cargo_bin("seekbar").unwrap()
}

#[test]
fn help_lists_subcommands() {
    seekbar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_show_prints_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[controlBar.progressControl]\nkeepTooltipsInside = true\n").unwrap();

    seekbar()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("keepTooltipsInside = true"));
}

#[test]
fn config_show_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[controlBar.progressControl]\nkeepTooltipsInside = 3\n").unwrap();

    seekbar()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn play_rejects_non_positive_duration() {
    seekbar()
        .args(["play", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}
