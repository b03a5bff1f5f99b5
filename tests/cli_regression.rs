// Regression tests for the `padlock` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn padlock() -> Command {
    Command::cargo_bin("padlock").unwrap()
}

#[test]
fn cli_prints_rendered_ast_from_stdin() {
    padlock()
        .args(["parse", "-", "--plain"])
        .write_stdin("S N N")
        .assert()
        .success()
        .stdout("S \n  N \n  N \n");
}

#[test]
fn cli_prints_json_ast() {
    padlock()
        .args(["parse", "-", "--plain", "--unrestricted-names", "--json"])
        .write_stdin("PbobP N")
        .assert()
        .success()
        .stdout(contains(r#""name": "bob""#).and(contains(r#""instruction": "nil""#)));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    padlock()
        .args(["parse", "-", "--plain"])
        .write_stdin("N N")
        .assert()
        .failure()
        .stderr(contains("padlock::invalid_symbol").and(contains("help:")));
}

#[test]
fn cli_reports_unexpected_eof() {
    padlock()
        .args(["parse", "-", "--plain"])
        .write_stdin("S N")
        .assert()
        .failure()
        .stderr(contains("padlock::unexpected_eof"));
}

#[test]
fn cli_trace_writes_events_to_stderr() {
    padlock()
        .args(["parse", "-", "--plain", "--trace", "--verbose"])
        .write_stdin("SNN")
        .assert()
        .success()
        .stderr(contains("branching at position 0").and(contains("reached end of program")));
}

#[test]
fn cli_lists_symbols() {
    padlock()
        .args(["symbols", "--plain"])
        .assert()
        .success()
        .stdout(contains("decrypt").and(contains("receive")));
}

#[test]
fn cli_fails_on_missing_file() {
    padlock()
        .args(["parse", "does/not/exist.padlock"])
        .assert()
        .failure()
        .stderr(contains("Error reading file"));
}
