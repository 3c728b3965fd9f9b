//! Command-line surface of the `roster` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn roster_cmd() -> Command {
    Command::cargo_bin("roster").unwrap()
}

#[test]
fn test_print_default_config() {
    roster_cmd()
        .arg("--print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 3"))
        .stdout(predicate::str::contains("[[genders]]"))
        .stdout(predicate::str::contains("[keys.table]"));
}

#[test]
fn test_printed_config_matches_bundled_example() {
    let output = roster_cmd()
        .arg("--print-default-config")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), roster::EXAMPLE_CONFIG);
}

#[test]
fn test_help_lists_options() {
    roster_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("--export-dir"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    roster_cmd()
        .args(["--page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page-size"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    roster_cmd().arg("--no-such-flag").assert().failure();
}
