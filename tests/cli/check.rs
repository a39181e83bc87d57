//! Tests for `ecomap-config check`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_check_without_key_properties_fails_every_variant() {
    let t = Test::new();

    let output = t.check(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "debug: missing signing material");
    assert_stderr_contains(&output, "release: missing signing material");
    assert_stderr_contains(&output, "signing check failed for: debug, release");
    assert_stderr_contains(&output, "storeFile");
}

#[test]
fn test_check_with_key_store_succeeds() {
    let t = Test::with_key_store();

    t.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug: upload"))
        .stdout(predicate::str::contains("release: upload"))
        .stdout(predicate::str::contains("sha256:"));
}

#[test]
fn test_check_key_store_directory_hints_store_file() {
    let t = Test::new();
    t.write("key.properties", "storeFile=keys\n");
    std::fs::create_dir(t.dir.path().join("keys")).unwrap();

    t.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a file"))
        .stderr(predicate::str::contains("set storeFile"));
}

#[test]
fn test_check_store_file_missing_on_disk() {
    let t = Test::new();
    t.write("key.properties", "storeFile=keys/gone.jks\n");

    // Resolution still succeeds
    let output = t.signing(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "gone.jks");

    // Signing does not
    let output = t.check(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "key store not found");
}

#[test]
fn test_check_single_variant() {
    let t = Test::new();

    let output = t.check(&["--variant", "release"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "release:");
    assert!(!stderr(&output).contains("debug:"));
    assert_stderr_contains(&output, "signing check failed for: release");
}

#[test]
fn test_check_store_file_under_custom_settings() {
    let t = Test::new();
    t.write(".ecomap.toml", "[files]\nsigning = \"android/key.properties\"\n");
    t.write("android/key.properties", "storeFile=upload.jks\n");
    t.write("upload.jks", KEY_STORE_BYTES);

    let output = t.check(&[]);
    assert_success(&output);
}
