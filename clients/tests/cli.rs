//! Integration tests for the opvec binaries.

#![allow(deprecated)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn populate(dir: &Path) {
    for n in 0..=0xffu8 {
        let body = format!(
            r#"[{{"name":"{n:02x}","initial":{{"pc":0}},"final":{{"pc":2}},"cycles":[[0,{n},"read"],[1,234,"read"]]}}]"#
        );
        fs::write(dir.join(format!("{n:02x}.json")), body).unwrap();
    }
}

/// No arguments: formats the working directory silently.
#[test]
fn format_without_arguments_uses_working_directory() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let out: serde_json::Value =
        serde_json::from_slice(&fs::read(tmp.path().join("f_ff.json")).unwrap()).unwrap();
    assert_eq!(out[0]["cycles"][0]["byte"], 255);
    assert_eq!(out[0]["final_state"]["pc"], 2);
}

#[test]
fn format_with_dir_flag() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-format")
        .unwrap()
        .arg("--dir")
        .arg(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("f_00.json").is_file());
    assert!(tmp.path().join("f_ff.json").is_file());
}

#[test]
fn format_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());
    fs::remove_file(tmp.path().join("05.json")).unwrap();

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input file not found"))
        .stderr(predicate::str::contains("05.json"));

    assert!(tmp.path().join("f_04.json").exists());
    assert!(!tmp.path().join("f_05.json").exists());
    assert!(!tmp.path().join("f_06.json").exists());
}

#[test]
fn format_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());
    fs::write(tmp.path().join("00.json"), "not json").unwrap();

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed test vectors"));
}

#[test]
fn format_help_mentions_dir() {
    Command::cargo_bin("opvec-format")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"));
}

#[test]
fn verify_after_format_succeeds() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success();

    Command::cargo_bin("opvec-verify")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("256 files checked, 0 failed"));
}

#[test]
fn verify_reports_tampered_file() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success();
    fs::write(tmp.path().join("f_42.json"), "[]").unwrap();

    Command::cargo_bin("opvec-verify")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL] f_42.json does not match 42.json"))
        .stdout(predicate::str::contains("record count: expected 1, got 0"))
        .stdout(predicate::str::contains("256 files checked, 1 failed"));
}

#[test]
fn verify_without_outputs_fails() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-verify")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("f_00.json"));
}

#[test]
fn format_verbose_logs_summary_to_stderr() {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path());

    Command::cargo_bin("opvec-format")
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("formatting complete"));
}
