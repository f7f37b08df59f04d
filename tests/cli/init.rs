//! Tests for `cellar init`.

use crate::support::*;
use std::fs;

#[test]
fn test_init_creates_store() {
    let t = Test::new();

    let output = t.init_store();
    assert_success(&output);
    assert_stderr_contains(&output, "initialized password store");

    let recipients = fs::read_to_string(t.store().join(".age-recipients")).unwrap();
    assert_eq!(recipients.trim(), t.public_key);
}

#[test]
fn test_init_without_recipients_fails() {
    let t = Test::new();

    let output = t.run(&["init"]);
    assert_failure(&output);
    assert!(!t.store().exists());
}

#[test]
fn test_init_rejects_malformed_age_recipient() {
    let t = Test::new();

    let output = t.run(&["init", "not-an-age-key"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid recipient");
    assert!(!t.store().join(".age-recipients").exists());
}

#[test]
fn test_init_twice_keeps_recipients() {
    let t = Test::init();
    let (other, _) = t.second_identity();

    let output = t.run(&["init", &other]);
    assert_success(&output);
    assert_stderr_contains(&output, "already exists");

    let recipients = fs::read_to_string(t.store().join(".age-recipients")).unwrap();
    assert_eq!(recipients.trim(), t.public_key);
}

#[test]
fn test_init_subfolder_writes_recipients() {
    let t = Test::with_secrets(&[("team/db", "s3cret")]);
    let (other, _) = t.second_identity();
    let output = t.run(&["init", "--path", "team", &t.public_key, &other]);
    assert_success(&output);

    let recipients = fs::read_to_string(t.store().join("team/.age-recipients")).unwrap();
    let lines: Vec<&str> = recipients.lines().collect();
    assert_eq!(lines, vec![t.public_key.as_str(), other.as_str()]);

    // still readable with our own identity after re-encryption
    assert_shows(&t, "team/db", "s3cret");
}

#[test]
fn test_init_subfolder_excluding_self_locks_us_out() {
    let t = Test::with_secrets(&[("shared/key", "value"), ("mine", "other")]);
    let (other, _) = t.second_identity();

    let output = t.run(&["init", "--path", "shared", &other]);
    assert_success(&output);

    assert_failure(&t.show("shared/key"));
    assert_shows(&t, "mine", "other");
}

#[test]
fn test_init_subfolder_on_missing_store_fails() {
    let t = Test::new();

    let output = t.run(&["init", "--path", "team", &t.public_key]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cellar init");
}

#[test]
fn test_store_flag_overrides_environment() {
    let t = Test::new();
    let elsewhere = t.dir.path().join("elsewhere");

    let output = t
        .cmd()
        .args(["--store", elsewhere.to_str().unwrap(), "init", &t.public_key])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(elsewhere.join(".age-recipients").is_file());
    assert!(!t.store().exists());
}

#[test]
fn test_store_setting_in_config() {
    let t = Test::new();
    let configured = t.dir.path().join("configured");
    t.write_config(&format!("store = \"{}\"", configured.display()));

    let output = t
        .cmd()
        .env_remove("PASSWORD_STORE_DIR")
        .args(["init", &t.public_key])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(configured.join(".age-recipients").is_file());
}
