//! Tests for `ecomap-config manifest`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_manifest_injects_placeholders() {
    let t = Test::with_local("GOOGLE_MAPS_API_KEY=ABC123\n");
    let template = t.write("AndroidManifest.xml.in", MANIFEST_TEMPLATE);

    let output = t.manifest(&[template.to_str().unwrap()]);
    assert_success(&output);
    assert_stdout_contains(&output, r#"android:value="ABC123""#);
    assert_stdout_contains(&output, r#"android:authorities="com.koudatek.ecomap.provider""#);
    assert_stdout_excludes(&output, "${");
}

#[test]
fn test_manifest_without_key_injects_empty_value() {
    let t = Test::new();
    let template = t.write("AndroidManifest.xml.in", MANIFEST_TEMPLATE);

    let output = t.manifest(&[template.to_str().unwrap()]);
    assert_success(&output);
    assert_stdout_contains(&output, r#"android:value="""#);
}

#[test]
fn test_manifest_writes_output_file() {
    let t = Test::with_local("GOOGLE_MAPS_API_KEY=ABC123\n");
    let template = t.write("AndroidManifest.xml.in", MANIFEST_TEMPLATE);
    let out = t.dir.path().join("AndroidManifest.xml");

    let output = t.manifest(&[template.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert_success(&output);
    assert!(t.read("AndroidManifest.xml").contains("ABC123"));
}

#[test]
fn test_manifest_unknown_placeholder_fails() {
    let t = Test::new();
    let template = t.write("AndroidManifest.xml.in", "<x v=\"${UNKNOWN_KEY}\"/>");

    t.cmd()
        .args(["manifest", template.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unresolved manifest placeholders: ${UNKNOWN_KEY}",
        ));
}

#[test]
fn test_manifest_lists_all_unknown_placeholders_and_writes_nothing() {
    let t = Test::new();
    let template = t.write("AndroidManifest.xml.in", "<x a=\"${FIRST}\" b=\"${SECOND}\"/>");
    let out = t.dir.path().join("AndroidManifest.xml");

    t.cmd()
        .args(["manifest", template.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("${FIRST}, ${SECOND}"));
    assert!(!out.exists());
}

#[test]
fn test_manifest_escapes_key_for_xml() {
    let t = Test::with_local("GOOGLE_MAPS_API_KEY=a&b\"c\n");
    let template = t.write("AndroidManifest.xml.in", MANIFEST_TEMPLATE);

    t.cmd()
        .args(["manifest", template.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"android:value="a&amp;b&quot;c""#));
}

#[test]
fn test_manifest_missing_template_fails() {
    let t = Test::new();
    let missing = t.dir.path().join("nope.xml");

    let output = t.manifest(&[missing.to_str().unwrap()]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read manifest template");
}
