//! Skip tests that need external tools.

/// True when `program` is on PATH.
pub fn has_program(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Return early when git is not installed.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        if !$crate::support::skip::has_program("git") {
            eprintln!("skipping: git not installed");
            return;
        }
    };
}

/// Return early when gpg is not installed.
#[macro_export]
macro_rules! skip_without_gpg {
    () => {
        if !$crate::support::skip::has_program("gpg") {
            eprintln!("skipping: gpg not installed");
            return;
        }
    };
}
