//! Tests for `cellar generate`.

use crate::support::*;

fn generated(output: &std::process::Output) -> String {
    stdout(output).trim_end_matches('\n').to_string()
}

#[test]
fn test_generate_prints_and_stores() {
    let t = Test::init();

    let output = t.generate("web/site", 24);
    assert_success(&output);
    let password = generated(&output);
    assert_eq!(password.chars().count(), 24);

    assert_shows(&t, "web/site", &password);
}

#[test]
fn test_generate_default_length() {
    let t = Test::init();

    let output = t.run(&["generate", "site"]);
    assert_success(&output);
    assert_eq!(generated(&output).len(), 15);
}

#[test]
fn test_generate_length_from_config() {
    let t = Test::new();
    t.write_config("\n[generate]\nlength = 40");
    assert_success(&t.init_store());

    let output = t.run(&["generate", "site"]);
    assert_success(&output);
    assert_eq!(generated(&output).len(), 40);
}

#[test]
fn test_generate_alphanumeric_only() {
    let t = Test::init();

    let output = t.run(&["generate", "--no-symbols", "site", "64"]);
    assert_success(&output);
    assert!(generated(&output).chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_without_digits() {
    let t = Test::init();

    let output = t.run(&["generate", "--no-digits", "--no-symbols", "site", "64"]);
    assert_success(&output);
    assert!(generated(&output).chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_generate_zero_length_fails() {
    let t = Test::init();

    let output = t.generate("site", 0);
    assert_failure(&output);
    assert_stderr_contains(&output, "at least 1");
    assert!(!t.secret_file("site").exists());
}

#[test]
fn test_generate_existing_needs_force() {
    let t = Test::with_secrets(&[("site", "old")]);

    let output = t.generate("site", 20);
    assert_failure(&output);
    assert_shows(&t, "site", "old");

    let output = t.run(&["generate", "--force", "site", "20"]);
    assert_success(&output);
    assert_shows(&t, "site", &generated(&output));
}

#[test]
fn test_generate_in_place_keeps_metadata() {
    let t = Test::init();
    assert_success(&t.insert_multiline("login", LOGIN_ENTRY));

    let output = t.run(&["generate", "--in-place", "login", "30"]);
    assert_success(&output);
    let password = generated(&output);

    let output = t.show("login");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("{password}\nusername: alice\nhost: example.com\n")
    );
}

#[test]
fn test_generate_in_place_conflicts_with_force() {
    let t = Test::init();
    assert_failure(&t.run(&["generate", "--in-place", "--force", "site"]));
}
