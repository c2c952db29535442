//! CLI surface tests for stretch-version.
//!
//! The report takes no arguments; these tests verify the help/version
//! output and that anything beyond the ambient log flags is rejected.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the stretch-version binary.
fn stretch_version() -> Command {
    Command::cargo_bin("stretch-version").expect("stretch-version binary should exist")
}

#[test]
fn help_flag_works() {
    stretch_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("diagnostic version report"));
}

#[test]
fn help_shows_log_flags() {
    stretch_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn version_flag_works() {
    stretch_version()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stretch-version"));
}

#[test]
fn unknown_flag_fails() {
    stretch_version()
        .arg("--nonexistent-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn positional_arguments_are_rejected() {
    stretch_version()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
