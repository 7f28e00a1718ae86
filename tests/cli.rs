//! CLI argument surface tests
//!
//! These only exercise argument handling, which fails before any connection
//! attempt, so no node is needed.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_format_argument_fails_without_output() {
    Command::cargo_bin("lnbalance")
        .unwrap()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<FORMAT>"));
}

#[test]
fn test_unrecognized_format_fails_without_output() {
    Command::cargo_bin("lnbalance")
        .unwrap()
        .arg("yaml")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unreadable_credentials_fail() {
    // A node directory that does not exist: the run must die on the missing
    // certificate before any output is produced.
    Command::cargo_bin("lnbalance")
        .unwrap()
        .args(["table", "--lnd-dir", "/nonexistent/lnd"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help_lists_formats() {
    Command::cargo_bin("lnbalance")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("dict"))
        .stdout(predicate::str::contains("json"));
}
