use predicates::prelude::*;

use crate::common::{REACH_VERSION_H, Workspace, bump};

#[test]
fn bumps_the_patch_constant() {
    let ws = Workspace::with_header("#define REACH_C_PATCH_VERSION\t41\n");
    bump()
        .args(["--profile", "patch"])
        .arg(ws.file())
        .assert()
        .success()
        .stdout("REACH_C_PATCH_VERSION updated from 41 to 42.\n");
    assert_eq!(ws.contents(), "#define REACH_C_PATCH_VERSION\t42\n");
}

#[test]
fn has_no_ceiling() {
    let ws = Workspace::with_header("REACH_C_PATCH_VERSION 255");
    bump().args(["--profile", "patch"]).arg(ws.file()).assert().success();
    assert_eq!(ws.contents(), "REACH_C_PATCH_VERSION 256");
}

#[test]
fn uses_its_own_exit_codes() {
    let ws = Workspace::with_header(REACH_VERSION_H);
    bump().args(["--profile", "patch"]).arg(ws.file()).assert().code(3);

    // The header declares PATCH_VERSION in both preprocessor branches.
    bump()
        .args(["--profile", "patch", "--constant", "PATCH_VERSION"])
        .arg(ws.file())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("expected exactly one"));

    bump()
        .args(["--profile", "patch", "--constant", "MINOR_VERSION", "--max", "5"])
        .arg(ws.file())
        .assert()
        .code(5);

    bump().args(["--profile", "patch"]).arg(ws.missing()).assert().code(2);
    assert_eq!(ws.contents(), REACH_VERSION_H);
}

#[test]
fn no_arguments_uses_patch_usage_code() {
    bump().args(["--profile", "patch"]).assert().code(1);
}
