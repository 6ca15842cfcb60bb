// tests/cli/smoke_tests.rs
use predicates::prelude::*;

use crate::common::{PHONES_CSV, Workspace, grouper};

#[test]
fn shows_help() {
    grouper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--unique-combinations"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn shows_version() {
    grouper().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage() {
    grouper()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Please follow this format:"))
        .stderr(predicate::str::contains("--file=input.csv --unique-combinations=output.csv"));
}

#[test]
fn missing_output_flag_prints_usage() {
    let ws = Workspace::new();
    let input = ws.write("in.csv", PHONES_CSV);

    grouper()
        .arg(format!("--file={}", input.display()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please follow this format:"));
}

#[test]
fn unknown_flag_prints_usage() {
    grouper()
        .args(["--file=a.csv", "--unique-combinations=b.csv", "--colour=red"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please follow this format:"));
}

#[test]
fn success_message_names_output_path() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);
    let output = ws.path("out.csv");

    ws.grouper("in.csv", "out.csv")
        .assert()
        .success()
        .stdout(format!("Grouped results written to {}\n", output.display()))
        .stderr(predicate::str::is_empty());
}

#[test]
fn file_not_found_is_reported() {
    let ws = Workspace::new();
    let missing = ws.path("nope.csv");

    ws.grouper("nope.csv", "out.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("File not found: {}", missing.display())));
    assert!(!ws.exists("out.csv"));
}

#[test]
fn unsupported_format_is_reported() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);

    ws.grouper("in.csv", "out.yaml")
        .arg("--format=yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported format: yaml"));
    assert!(!ws.exists("out.yaml"));
}

#[test]
fn unsupported_format_wins_over_missing_file() {
    let ws = Workspace::new();

    ws.grouper("absent.csv", "out.csv")
        .arg("--format=toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported format: toml"));
}

#[test]
fn format_flag_is_case_insensitive() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);

    ws.grouper("in.csv", "out.csv").arg("--format=CSV").assert().success();
    assert!(ws.read("out.csv").starts_with("brand_name,"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);

    ws.grouper("in.csv", "out.csv")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Grouped results written to"))
        .stderr(predicate::str::contains("grouped 4 records into 2 combinations"));
}
