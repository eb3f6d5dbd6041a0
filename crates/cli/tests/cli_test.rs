//! End-to-end tests for the intpow binary

use assert_cmd::Command;
use predicates::prelude::*;

fn intpow() -> Command {
    let mut cmd = Command::cargo_bin("intpow").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_cube_of_three() {
    intpow()
        .assert()
        .success()
        .code(0)
        .stdout("27\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_output_is_identical_across_runs() {
    let first = intpow().output().unwrap();
    let second = intpow().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_debug_logging_keeps_stdout_clean() {
    intpow()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("27\n")
        .stderr(predicate::str::contains("cube(3) = 27"));
}

#[test]
fn test_rejects_arguments() {
    intpow()
        .arg("4")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_version_flag() {
    intpow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("intpow "));
}
