use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;

/// Write an object file (origin 0x3000) into the target tmp dir.
fn obj_fixture(name: &str, words: &[u16]) -> PathBuf {
    let mut bytes = 0x3000u16.to_be_bytes().to_vec();
    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    let path = std::env::temp_dir().join(format!("braid-{}-{}.obj", name, std::process::id()));
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn runs_without_arguments() {
    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.assert().success();
}

#[test]
fn halts_cleanly() {
    // ADD R0, R0, #3; HALT
    let obj = obj_fixture("halt", &[0x1023, 0xF025]);

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg(&obj);

    cmd.assert()
        .success()
        .stdout(contains("Halted"))
        .stdout(contains("Completed"));
}

#[test]
fn runs_via_subcommand() {
    let obj = obj_fixture("subcommand", &[0xF025]);

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg("run").arg(&obj);

    cmd.assert().success().stdout(contains("Halted"));
}

#[test]
fn prints_string() {
    // LEA R0, #2; PUTS; HALT; "Hi!\0"
    let obj = obj_fixture(
        "puts",
        &[0xE002, 0xF022, 0xF025, 0x0048, 0x0069, 0x0021, 0x0000],
    );

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg(&obj);

    cmd.assert()
        .success()
        .stdout(contains("Hi!"))
        .stdout(contains("Halted"));
}

#[test]
fn echoes_input() {
    // GETC; OUT; HALT
    let obj = obj_fixture("echo", &[0xF020, 0xF021, 0xF025]);

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg(&obj).write_stdin("@");

    cmd.assert().success().stdout(contains("@"));
}

#[test]
fn rejects_reserved_opcode() {
    let obj = obj_fixture("reserved", &[0x8000]);

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg(&obj);

    cmd.assert().failure().stderr(contains("reserved"));
}

#[test]
fn rejects_truncated_image() {
    let path = std::env::temp_dir().join(format!("braid-truncated-{}.obj", std::process::id()));
    fs::write(&path, [0x30]).unwrap();

    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg(&path);

    cmd.assert().failure().stderr(contains("too short"));
}

#[test]
fn rejects_missing_file() {
    let mut cmd = Command::cargo_bin("braid").unwrap();
    cmd.arg("does-not-exist.obj");

    cmd.assert().failure();
}
