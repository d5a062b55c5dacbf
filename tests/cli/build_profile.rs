use predicates::prelude::*;

use crate::common::{REACH_VERSION_H, Workspace, bump};

#[test]
fn bumps_the_real_header() {
    let ws = Workspace::with_header(REACH_VERSION_H);
    bump()
        .arg(ws.file())
        .assert()
        .success()
        .stdout("BUILD_VERSION updated from 2 to 3.\n");

    let expected = REACH_VERSION_H.replace("#define BUILD_VERSION 2", "#define BUILD_VERSION 3");
    assert_eq!(ws.contents(), expected);
}

#[test]
fn bumping_twice_adds_two() {
    let ws = Workspace::with_header(REACH_VERSION_H);
    bump().arg(ws.file()).assert().success();
    bump().arg(ws.file()).assert().success();
    assert!(ws.contents().contains("#define BUILD_VERSION 4\n"));
}

#[test]
fn missing_declaration_leaves_file_alone() {
    let ws = Workspace::with_header("#define MAJOR_VERSION 2\n");
    bump()
        .arg(ws.file())
        .assert()
        .code(251)
        .stderr(predicate::str::contains("BUILD_VERSION not found"))
        .stderr(predicate::str::contains("reach_version.h: "));
    assert_eq!(ws.contents(), "#define MAJOR_VERSION 2\n");
}

#[test]
fn two_declarations_are_ambiguous() {
    let text = "#define BUILD_VERSION 1\n#define BUILD_VERSION 2\n";
    let ws = Workspace::with_header(text);
    bump()
        .arg(ws.file())
        .assert()
        .code(254)
        .stderr(predicate::str::contains("found 2 matches"));
    assert_eq!(ws.contents(), text);
}

#[test]
fn refuses_to_pass_255() {
    let ws = Workspace::with_header("#define BUILD_VERSION 255\n");
    bump()
        .arg(ws.file())
        .assert()
        .code(253)
        .stderr(predicate::str::contains("beyond 255"));
    assert_eq!(ws.contents(), "#define BUILD_VERSION 255\n");
}

#[test]
fn no_max_lifts_the_ceiling() {
    let ws = Workspace::with_header("#define BUILD_VERSION 255\n");
    bump().arg("--no-max").arg(ws.file()).assert().success();
    assert_eq!(ws.contents(), "#define BUILD_VERSION 256\n");
}

#[test]
fn missing_file_is_a_file_access_error() {
    let ws = Workspace::with_header("");
    bump()
        .arg(ws.missing())
        .assert()
        .code(252)
        .stderr(predicate::str::contains("missing.h"));
}

#[test]
fn dry_run_leaves_file_alone() {
    let ws = Workspace::with_header("#define BUILD_VERSION 9\n");
    bump()
        .arg("--dry-run")
        .arg(ws.file())
        .assert()
        .success()
        .stdout(predicate::str::contains("would be updated from 9 to 10"));
    assert_eq!(ws.contents(), "#define BUILD_VERSION 9\n");
}

#[test]
fn latin1_header_is_bumped_byte_for_byte() {
    let ws = Workspace::with_bytes(b"/* \xa9 1998 Cygnus */\n#define BUILD_VERSION 2\n/* fin \xe9 */\n");
    bump().arg(ws.file()).assert().success();
    assert_eq!(ws.bytes(), b"/* \xa9 1998 Cygnus */\n#define BUILD_VERSION 3\n/* fin \xe9 */\n");
}

#[cfg(unix)]
#[test]
fn symlinked_header_keeps_its_link() {
    let ws = Workspace::with_header("#define BUILD_VERSION 7\n");
    let link = ws.path("linked_version.h");
    std::os::unix::fs::symlink(ws.file(), &link).unwrap();

    bump().arg(&link).assert().success();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(ws.contents(), "#define BUILD_VERSION 8\n");
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_does_not_fail_a_finished_bump() {
    let ws = Workspace::with_header("#define BUILD_VERSION 5\n");
    let full = std::fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_bump"))
        .env_remove("RUST_LOG")
        .arg(ws.file())
        .stdout(full)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write outcome"));
    assert_eq!(ws.contents(), "#define BUILD_VERSION 6\n");
}
