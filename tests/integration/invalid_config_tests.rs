//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{abs_path, tbl_command};

fn tbl_command_with_config(config: &str) -> std::process::Command {
    let mut cmd = tbl_command(&[]);
    cmd.arg("-C");
    cmd.arg(abs_path(config));
    cmd.arg("./tests/does_not_exist.csv");

    cmd
}

#[test]
fn test_toml_mismatch_type() {
    tbl_command_with_config("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_duplicate_key() {
    tbl_command_with_config("./tests/invalid_configs/duplicate_key.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    tbl_command_with_config("./tests/invalid_configs/invalid_colour_hex.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_config_delimiter() {
    tbl_command_with_config("./tests/invalid_configs/invalid_delimiter.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid delimiter"));
}

#[test]
fn test_invalid_config_theme() {
    tbl_command_with_config("./tests/invalid_configs/invalid_theme.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "is an invalid built-in color scheme",
        ));
}
