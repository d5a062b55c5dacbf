use predicates::prelude::*;

use crate::common::{Workspace, bump};

#[test]
fn shows_help() {
    bump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"));
}

#[test]
fn shows_version() {
    bump().arg("--version").assert().success().stdout(predicate::str::contains("bump"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    bump()
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("needs an argument"));
}

#[test]
fn unknown_flag_is_a_usage_error_of_the_selected_profile() {
    bump().args(["--bogus", "x.h"]).assert().code(255);
    bump().args(["--profile", "patch", "--bogus", "x.h"]).assert().code(1);
}

#[test]
fn invalid_constant_is_rejected_before_touching_the_file() {
    let ws = Workspace::with_header("FOO 1");
    bump()
        .args(["--constant", "FOO-BAR"])
        .arg(ws.file())
        .assert()
        .code(255)
        .stderr(predicate::str::contains("invalid constant name"));
    assert_eq!(ws.contents(), "FOO 1");
}

#[test]
fn custom_constant_keeps_whitespace() {
    let ws = Workspace::with_header("#define FOO_VERSION   7\n");
    bump()
        .args(["--constant", "FOO_VERSION"])
        .arg(ws.file())
        .assert()
        .success()
        .stdout("FOO_VERSION updated from 7 to 8.\n");
    assert_eq!(ws.contents(), "#define FOO_VERSION   8\n");
}

#[test]
fn json_output_reports_both_values() {
    let ws = Workspace::with_header("BUILD_VERSION 41");
    let output = bump().args(["--format", "json"]).arg(ws.file()).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "BUILD_VERSION");
    assert_eq!(value["previous"], 41);
    assert_eq!(value["current"], 42);
    assert_eq!(value["written"], true);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ws = Workspace::with_header("BUILD_VERSION 1");
    bump()
        .arg("-v")
        .arg(ws.file())
        .assert()
        .success()
        .stdout("BUILD_VERSION updated from 1 to 2.\n")
        .stderr(predicate::str::contains("bumping BUILD_VERSION"));
}
