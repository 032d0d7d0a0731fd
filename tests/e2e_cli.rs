//! CLI end-to-end tests
//!
//! Tests for the registrar command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the registrar binary
#[allow(deprecated)]
fn registrar_cmd() -> Command {
    let mut cmd = Command::cargo_bin("registrar").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn db_arg(path: &Path) -> [String; 2] {
    ["--database".to_string(), path.display().to_string()]
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = registrar_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("registrar"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = registrar_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("registrar "));
}

#[test]
fn test_cli_no_args_seeds_default_file() {
    let temp = tempdir().unwrap();

    let mut cmd = registrar_cmd();
    let stdout = stdout_of(cmd.current_dir(temp.path()));

    assert!(temp.path().join("student_registration.db").exists());
    assert_eq!(stdout.lines().count(), 26);
    assert_eq!(stdout.lines().next(), Some("Student: S1, John Doe, New York"));
}

#[test]
fn test_cli_run_prints_every_row_once() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("school.db");

    let mut cmd = registrar_cmd();
    let stdout = stdout_of(cmd.arg("run").args(db_arg(&db)));
    let lines: Vec<&str> = stdout.lines().collect();

    for expected in [
        "Student: S1, John Doe, New York",
        "Student: S6, Elizabeth Jones, Philadelphia",
        "Student: S10, Emily Taylor, San Jose",
        "Course: C1, Math, Algebra 101",
        "Course: C4, History, World History 101",
        "Registration: R1, Course: C1, Student: S1",
        "Registration: R10, Course: C2, Student: S10",
        "Registration: R12, Course: C4, Student: S2",
    ] {
        assert_eq!(
            lines.iter().filter(|l| **l == expected).count(),
            1,
            "expected exactly one `{expected}`"
        );
    }
    assert_eq!(lines.iter().filter(|l| l.starts_with("Student: ")).count(), 10);
    assert_eq!(lines.iter().filter(|l| l.starts_with("Course: ")).count(), 4);
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("Registration: ")).count(),
        12
    );
}

#[test]
fn test_cli_run_twice_is_identical() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("school.db");

    let first = stdout_of(registrar_cmd().args(db_arg(&db)));
    let second = stdout_of(registrar_cmd().args(db_arg(&db)));

    assert_eq!(first, second);
}

#[test]
fn test_cli_report_after_run() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("school.db");

    let seeded = stdout_of(registrar_cmd().arg("run").args(db_arg(&db)));
    let reported = stdout_of(registrar_cmd().arg("report").args(db_arg(&db)));

    assert_eq!(seeded, reported);
}

#[test]
fn test_cli_report_on_fresh_database_fails() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("empty.db");

    registrar_cmd()
        .arg("report")
        .args(db_arg(&db))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no such table"));
}

#[test]
fn test_cli_run_json() {
    let mut cmd = registrar_cmd();
    let stdout = stdout_of(cmd.args(["--in-memory", "run", "--json"]));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["students"].as_array().unwrap().len(), 10);
    assert_eq!(json["courses"][1]["title"], "Biology 101");
}

#[test]
fn test_cli_verify_after_run() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("school.db");
    stdout_of(registrar_cmd().args(db_arg(&db)));

    registrar_cmd()
        .arg("verify")
        .args(db_arg(&db))
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration: 12 rows (expected 12)"))
        .stdout(predicate::str::contains("matches the sample dataset"));
}

#[test]
fn test_cli_verify_detects_tampering() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("school.db");
    stdout_of(registrar_cmd().args(db_arg(&db)));

    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute("DELETE FROM Registration WHERE RegistrationId = 'R5'", [])
        .unwrap();
    drop(conn);

    registrar_cmd()
        .arg("verify")
        .args(db_arg(&db))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Registration: 11 rows (expected 12)"))
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_cli_unopenable_database_fails() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("missing-dir").join("school.db");

    registrar_cmd()
        .args(db_arg(&db))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to open database"));
}

#[test]
fn test_cli_config_file_sets_database() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("configured.db");
    let config_file = temp.path().join("registrar.toml");
    fs::write(
        &config_file,
        format!("[database]\npath = {:?}\n", db.display().to_string()),
    )
    .unwrap();

    let stdout = stdout_of(registrar_cmd().arg("--config").arg(&config_file));

    assert!(db.exists());
    assert_eq!(stdout.lines().count(), 26);
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("registrar.toml");
    fs::write(&config_file, "[database]\nin_memory = true\n").unwrap();

    registrar_cmd()
        .arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("in-memory database"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("registrar.toml");
    fs::write(&config_file, "[database]\npath = \"\"\n").unwrap();

    registrar_cmd()
        .arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}
