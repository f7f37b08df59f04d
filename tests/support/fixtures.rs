//! Test data.

/// A multi-line entry with a password and metadata fields.
pub const LOGIN_ENTRY: &str = "hunter2\nusername: alice\nhost: example.com\n";

/// Names that must be rejected as secret paths.
pub const INVALID_PATHS: &[&str] = &["../escape", "a/../../b", "/absolute", "a//b", ""];

/// A small store: (path, value).
pub const SAMPLE_SECRETS: &[(&str, &str)] = &[
    ("email/work", "work-pass"),
    ("email/personal", "personal-pass"),
    ("bank", "bank-pass"),
    ("social/forum", "forum-pass"),
];
