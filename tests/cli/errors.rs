//! Error reporting and hints.

use crate::support::*;
use std::fs;

#[test]
fn test_missing_store_hints_init() {
    let t = Test::new();

    let output = t.ls();
    assert_failure(&output);
    assert_stderr_contains(&output, "password store not found");
    assert_stderr_contains(&output, "cellar init");
}

#[test]
fn test_store_without_recipient_file() {
    let t = Test::new();
    fs::create_dir_all(t.store()).unwrap();

    let output = t.ls();
    assert_failure(&output);
    assert_stderr_contains(&output, "no recipient file");
}

#[test]
fn test_missing_identity_hint() {
    let t = Test::init();
    fs::write(t.config_path(), "cipher = \"age\"\n").unwrap();

    let output = t.ls();
    assert_failure(&output);
    assert_stderr_contains(&output, "identity");
    assert_stderr_contains(&output, "[age] identity");
}

#[test]
fn test_malformed_config() {
    let t = Test::init();
    fs::write(t.config_path(), "cipher = [not toml").unwrap();

    let output = t.ls();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_unknown_cipher() {
    let t = Test::init();
    fs::write(t.config_path(), "cipher = \"rot13\"\n").unwrap();

    assert_failure(&t.ls());
}

#[test]
fn test_wrong_identity_cannot_decrypt() {
    let t = Test::with_secrets(&[("site", "value")]);
    let (_, other_identity) = t.second_identity();
    fs::write(
        t.config_path(),
        format!(
            "cipher = \"age\"\n[age]\nidentity = \"{}\"\n",
            other_identity.display()
        ),
    )
    .unwrap();

    let output = t.show("site");
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_empty_recipient_file() {
    let t = Test::init();
    fs::write(t.store().join(".age-recipients"), "\n").unwrap();

    let output = t.insert("site", "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "lists no identities");
}

#[cfg(unix)]
#[test]
fn test_symlink_escape_rejected() {
    let t = Test::init();
    let outside = t.dir.path().join("outside");
    fs::create_dir_all(&outside).unwrap();
    std::os::unix::fs::symlink(&outside, t.store().join("link")).unwrap();

    let output = t.insert("link/secret", "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "outside the password store");
    assert!(!outside.join("secret.age").exists());
}

#[test]
fn test_errors_go_to_stderr_only() {
    let t = Test::init();

    let output = t.show("missing");
    assert_failure(&output);
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("✗ "));
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "cellar");
}
