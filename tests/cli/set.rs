//! Tests for `ecomap-config set`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_set_creates_local_properties() {
    let t = Test::new();

    assert_secret_roundtrip(&t, "GOOGLE_MAPS_API_KEY", "ABC123");
    assert_eq!(t.read("local.properties"), "GOOGLE_MAPS_API_KEY=ABC123\n");
}

#[test]
fn test_set_keeps_other_entries() {
    let t = Test::with_local("sdk.dir=/opt/sdk\nGOOGLE_MAPS_API_KEY=old\n");

    let output = t.set("GOOGLE_MAPS_API_KEY", "new", "local");
    assert_success(&output);

    assert_eq!(
        t.read("local.properties"),
        "sdk.dir=/opt/sdk\nGOOGLE_MAPS_API_KEY=new\n"
    );
}

#[test]
fn test_set_store_file_then_check() {
    let t = Test::new();
    t.write("upload.jks", KEY_STORE_BYTES);

    assert_success(&t.set("storeFile", "upload.jks", "signing"));
    assert_success(&t.set("keyAlias", "upload", "signing"));

    let output = t.check(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "upload");
}

#[cfg(unix)]
#[test]
fn test_set_signing_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.set("storePassword", "secret", "signing"));

    let mode = std::fs::metadata(t.dir.path().join("key.properties"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_set_rejects_empty_key() {
    let t = Test::new();

    let output = t.set("", "value", "local");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid property key");
}

#[test]
fn test_set_value_with_backslashes_roundtrips() {
    let t = Test::new();

    assert_secret_roundtrip(&t, "storePath", "C:\\keys\\upload.jks");
}

#[test]
fn test_set_preserves_comments_and_unparsed_lines() {
    let t = Test::with_local(&format!("{}flutter.extra: colon-form\n", LOCAL_PROPERTIES));

    t.cmd()
        .args(["set", "GOOGLE_MAPS_API_KEY", "NEW", "--file", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set GOOGLE_MAPS_API_KEY"));

    let content = t.read("local.properties");
    assert!(content.starts_with(
        "## This file must *NOT* be checked into Version Control Systems,\n\
         # as it contains information specific to your local configuration.\n"
    ));
    assert!(content.contains("sdk.dir=/home/dev/Android/Sdk\n"));
    assert!(content.contains("GOOGLE_MAPS_API_KEY=NEW\n"));
    assert!(!content.contains("AIzaSyTestKey0123456789"));
    assert!(content.ends_with("flutter.extra: colon-form\n"));
}

#[test]
fn test_set_appends_new_key_after_existing_content() {
    let t = Test::with_local(LOCAL_PROPERTIES);

    assert_success(&t.set("flutter.versionCode", "7", "local"));

    assert_eq!(
        t.read("local.properties"),
        format!("{}flutter.versionCode=7\n", LOCAL_PROPERTIES)
    );
}
