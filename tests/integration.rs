// Integration tests for the repopulse CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and stdout/stderr output. None of them performs network I/O: they stop
// at argument validation or config loading.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a Command for the repopulse binary with an isolated
/// HOME, so a developer's global config never leaks into a test.
fn repopulse(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repopulse").expect("binary should exist");
    cmd.env("HOME", home.path());
    cmd.env_remove("REPOPULSE_TOKEN");
    cmd.env_remove("GITHUB_TOKEN");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repopulse"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("health"));
}

#[test]
fn analyze_requires_repo() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn check_requires_repo() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_malformed_reference_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .args(["analyze", "not-a-repo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid repository reference"));
}

#[test]
fn check_rejects_malformed_reference_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .args(["check", "https://github.com/"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid repository reference"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let home = TempDir::new().expect("temp dir should be created");
    repopulse(&home)
        .args(["analyze", "octo/demo", "--quiet", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn invalid_local_config_fails_before_any_network_call() {
    let home = TempDir::new().expect("temp dir should be created");
    let cwd = TempDir::new().expect("temp dir should be created");
    fs::write(
        cwd.path().join("repopulse.toml"),
        r#"
[thresholds]
bloat_files = 2
sparse_files = 10
"#,
    )
    .expect("config should write");

    repopulse(&home)
        .current_dir(cwd.path())
        .args(["check", "octo/demo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("sparse_files"));
}

#[test]
fn malformed_global_config_is_reported_with_its_path() {
    let home = TempDir::new().expect("temp dir should be created");
    let cwd = TempDir::new().expect("temp dir should be created");
    let global_dir = home.path().join(".config/repopulse");
    fs::create_dir_all(&global_dir).expect("global config dir should be created");
    fs::write(global_dir.join("config.toml"), "not valid toml [")
        .expect("global config should write");

    repopulse(&home)
        .current_dir(cwd.path())
        .args(["check", "octo/demo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config.toml"));
}
