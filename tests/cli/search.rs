//! Tests for `cellar find` and `cellar grep`.

use crate::support::*;

#[test]
fn test_find_matches_names_case_insensitively() {
    let t = Test::with_secrets(SAMPLE_SECRETS);

    let output = t.run(&["find", "WORK", "forum"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with("Search Terms: WORK,forum\n"), "got: {out}");
    assert!(out.contains("work"));
    assert!(out.contains("forum"));
    assert!(!out.contains("personal"));
    assert!(!out.contains("bank"));
}

#[test]
fn test_find_nothing() {
    let t = Test::with_secrets(SAMPLE_SECRETS);

    let output = t.run(&["find", "zzz"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Search Terms: zzz\n");
}

#[test]
fn test_find_requires_terms() {
    let t = Test::init();
    assert_failure(&t.run(&["find"]));
}

#[test]
fn test_grep_prints_matching_lines() {
    let t = Test::init();
    assert_success(&t.insert_multiline("login", LOGIN_ENTRY));
    assert_success(&t.insert("other", "nothing here"));

    let output = t.run(&["grep", "alice"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "login:\nusername: alice\n");
}

#[test]
fn test_grep_ignore_case() {
    let t = Test::with_secrets(&[("api", "Token-ABC")]);

    let output = t.run(&["grep", "token-abc"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");

    let output = t.run(&["grep", "-i", "token-abc"]);
    assert_success(&output);
    assert_stdout_contains(&output, "api:");
    assert_stdout_contains(&output, "Token-ABC");
}

#[test]
fn test_grep_invalid_pattern() {
    let t = Test::init();

    let output = t.run(&["grep", "("]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid pattern");
}
