//! Assertion helpers for command output.

use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert the command succeeded, printing both streams if not.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Assert the command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(
        out.contains(needle),
        "stdout should contain {:?}, got: {}",
        needle,
        out
    );
}

pub fn assert_stdout_not_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(needle),
        "stdout should not contain {:?}, got: {}",
        needle,
        out
    );
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let err = stderr(output);
    assert!(
        err.contains(needle),
        "stderr should contain {:?}, got: {}",
        needle,
        err
    );
}

/// Assert `cellar show <path>` prints exactly `value` on its first line.
pub fn assert_shows(t: &super::Test, path: &str, value: &str) {
    let output = t.show(path);
    assert_success(&output);
    assert_eq!(stdout(&output).lines().next(), Some(value));
}
