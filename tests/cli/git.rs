//! Tests for git-backed history.

use crate::skip_without_git;
use crate::support::*;
use std::fs;

fn git_store(secrets: &[(&str, &str)]) -> Test {
    let t = Test::with_secrets(secrets);
    assert_success(&t.git(&["init"]));
    t
}

#[test]
fn test_git_init_commits_existing_contents() {
    skip_without_git!();
    let t = git_store(&[("site", "value")]);

    assert!(t.store().join(".git").is_dir());
    assert_eq!(t.git_log(), vec!["Add current contents of password store."]);

    let attributes = fs::read_to_string(t.store().join(".gitattributes")).unwrap();
    assert_eq!(attributes.trim(), "*.age diff=age");
}

#[test]
fn test_mutations_are_committed() {
    skip_without_git!();
    let t = git_store(&[]);

    assert_success(&t.insert("site", "value"));
    assert_success(&t.generate("other", 12));
    assert_success(&t.mv("site", "renamed"));
    assert_success(&t.cp("renamed", "copy"));
    assert_success(&t.rm("copy"));

    assert_eq!(
        t.git_log(),
        vec![
            "Remove copy from store.",
            "Copy renamed to copy.",
            "Rename site to renamed.",
            "Add generated password for other to store.",
            "Add given password for site to store.",
            "Add current contents of password store.",
        ]
    );
}

#[test]
fn test_reencrypt_is_committed() {
    skip_without_git!();
    let t = git_store(&[("site", "value")]);

    assert_success(&t.run(&["reencrypt"]));
    let log = t.git_log();
    assert_eq!(log[0], "Re-encrypt store for its current recipients.");
}

#[test]
fn test_git_passthrough() {
    skip_without_git!();
    let t = git_store(&[("site", "value")]);

    let output = t.git(&["log", "--oneline"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Add current contents of password store.");
}

#[test]
fn test_git_passthrough_propagates_failure() {
    skip_without_git!();
    let t = git_store(&[]);

    let output = t.git(&["no-such-subcommand"]);
    assert_failure(&output);
}

#[test]
fn test_no_history_without_repository() {
    skip_without_git!();
    let t = Test::with_secrets(&[("site", "value")]);

    assert!(!t.store().join(".git").exists());
    assert_success(&t.rm("site"));
    assert!(!t.store().join(".git").exists());
}

#[test]
fn test_git_disabled_in_config() {
    let t = Test::new();
    t.write_config("git = false");
    assert_success(&t.init_store());

    let output = t.git(&["status"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "disabled");
}
