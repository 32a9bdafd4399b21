//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::tbl_command;

#[test]
fn test_no_files() {
    tbl_command(&[])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn test_missing_file() {
    tbl_command(&["./tests/does_not_exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read"));
}

#[test]
fn test_invalid_delimiter() {
    tbl_command(&["-d", "ab", "./tests/does_not_exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid delimiter"));
}

#[test]
fn test_multi_byte_delimiter() {
    tbl_command(&["-d", "ä", "./tests/does_not_exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid delimiter"));
}

#[test]
fn test_invalid_theme() {
    tbl_command(&["--theme", "doesnt-exist", "./tests/does_not_exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version() {
    tbl_command(&["-V"]).assert().success();
}

#[test]
fn test_help() {
    tbl_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tbl [OPTIONS] <FILES>..."));
}
