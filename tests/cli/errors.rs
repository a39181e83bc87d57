//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "ecomap-config");
}

#[test]
fn test_missing_project_dir() {
    let t = Test::new();
    let missing = t.dir.path().join("does-not-exist");

    #[allow(deprecated)]
    let output = assert_cmd::Command::cargo_bin("ecomap-config")
        .unwrap()
        .env_remove("ECOMAP_PROJECT_DIR")
        .arg("--project-dir")
        .arg(&missing)
        .arg("resolve")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "project directory not found");
    assert_stderr_contains(&output, "--project-dir");
}

#[test]
fn test_project_dir_from_env() {
    let t = Test::with_local("GOOGLE_MAPS_API_KEY=from-env\n");

    #[allow(deprecated)]
    let output = assert_cmd::Command::cargo_bin("ecomap-config")
        .unwrap()
        .env("ECOMAP_PROJECT_DIR", t.dir.path())
        .args(["secret", "GOOGLE_MAPS_API_KEY"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "from-env\n");
}

#[test]
fn test_malformed_settings_file() {
    let t = Test::new();
    t.write(".ecomap.toml", "this is not valid toml { [ }");

    let output = t.resolve(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid settings file");
    assert_stderr_contains(&output, ".ecomap.toml");
}

#[test]
fn test_property_file_is_directory() {
    let t = Test::new();
    std::fs::create_dir(t.dir.path().join("local.properties")).unwrap();

    let output = t.secret("GOOGLE_MAPS_API_KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read");
}

#[test]
fn test_info() {
    let t = Test::new();

    let output = t.cmd().arg("info").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "com.koudatek.ecomap");
    assert_stdout_contains(&output, "firebase-bom:33.0.0");
    assert_stdout_contains(&output, "27.0.12077973");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_ecomap-config") || out.contains("complete"));
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("complete") && out.contains("ecomap-config"));
}
