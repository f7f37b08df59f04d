//! Tests for `cellar mv` and `cellar cp`.

use crate::support::*;
use std::fs;

#[test]
fn test_mv_secret() {
    let t = Test::with_secrets(&[("old/name", "value")]);

    let output = t.mv("old/name", "new/name");
    assert_success(&output);
    assert_stderr_contains(&output, "moved");

    assert!(!t.secret_file("old/name").exists());
    assert!(!t.store().join("old").exists());
    assert_shows(&t, "new/name", "value");
}

#[test]
fn test_mv_into_existing_folder() {
    let t = Test::with_secrets(&[("site", "value"), ("archive/keep", "k")]);

    let output = t.mv("site", "archive");
    assert_success(&output);
    assert_shows(&t, "archive/site", "value");
    assert_shows(&t, "archive/keep", "k");
}

#[test]
fn test_mv_folder() {
    let t = Test::with_secrets(SAMPLE_SECRETS);

    let output = t.mv("email", "mail");
    assert_success(&output);
    assert!(!t.store().join("email").exists());
    assert_shows(&t, "mail/work", "work-pass");
    assert_shows(&t, "mail/personal", "personal-pass");
}

#[test]
fn test_mv_onto_existing_needs_force() {
    let t = Test::with_secrets(&[("a", "first"), ("b", "second")]);

    let output = t.mv("a", "b");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_shows(&t, "a", "first");
    assert_shows(&t, "b", "second");

    let output = t.run(&["mv", "--force", "a", "b"]);
    assert_success(&output);
    assert!(!t.secret_file("a").exists());
    assert_shows(&t, "b", "first");
}

#[test]
fn test_mv_missing_source() {
    let t = Test::init();

    let output = t.mv("ghost", "elsewhere");
    assert_failure(&output);
    assert_stderr_contains(&output, "not in the password store");
}

#[test]
fn test_mv_folder_into_itself_fails() {
    let t = Test::with_secrets(SAMPLE_SECRETS);

    let output = t.mv("email", "email/inner");
    assert_failure(&output);
    assert_shows(&t, "email/work", "work-pass");
}

#[test]
fn test_cp_force_onto_own_folder_keeps_secret() {
    let t = Test::with_secrets(&[("web/github", "token")]);

    let output = t.run(&["cp", "--force", "web/github", "web"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "already there");
    assert_shows(&t, "web/github", "token");
}

#[test]
fn test_cp_keeps_source() {
    let t = Test::with_secrets(&[("original", "value")]);

    let output = t.cp("original", "duplicate");
    assert_success(&output);
    assert_stderr_contains(&output, "copied");
    assert_shows(&t, "original", "value");
    assert_shows(&t, "duplicate", "value");
}

#[test]
fn test_cp_folder() {
    let t = Test::with_secrets(SAMPLE_SECRETS);

    let output = t.cp("email", "backup");
    assert_success(&output);
    assert_shows(&t, "email/work", "work-pass");
    assert_shows(&t, "backup/work", "work-pass");
}

#[test]
fn test_mv_reencrypt_for_destination_recipients() {
    let t = Test::with_secrets(&[("secret", "value")]);
    let (other, other_identity) = t.second_identity();
    assert_success(&t.run(&["init", "--path", "team", &t.public_key, &other]));

    let output = t.run(&["mv", "--reencrypt", "secret", "team/secret"]);
    assert_success(&output);

    // the second identity can now read it
    let ciphertext = fs::read(t.secret_file("team/secret")).unwrap();
    let plaintext = decrypt_with(&other_identity, &ciphertext);
    assert_eq!(plaintext, "value");
}

#[test]
fn test_mv_without_reencrypt_warns_on_recipient_change() {
    let t = Test::with_secrets(&[("secret", "value")]);
    let (other, _) = t.second_identity();
    assert_success(&t.run(&["init", "--path", "team", &t.public_key, &other]));

    let output = t.mv("secret", "team/secret");
    assert_success(&output);
    assert_stderr_contains(&output, "recipients");
}

fn decrypt_with(identity_file: &std::path::Path, ciphertext: &[u8]) -> String {
    use std::io::Read;

    let contents = fs::read_to_string(identity_file).unwrap();
    let identity: age::x25519::Identity = contents.trim().parse().unwrap();
    let reader = age::armor::ArmoredReader::new(ciphertext);
    let decryptor = age::Decryptor::new(reader).unwrap();
    let mut out = String::new();
    decryptor
        .decrypt(std::iter::once(&identity as &dyn age::Identity))
        .unwrap()
        .read_to_string(&mut out)
        .unwrap();
    out
}
