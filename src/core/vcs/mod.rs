//! Version control.
//!
//! History is optional: a store whose metadata directory exists is
//! committed to after each change, anything else is left alone. The
//! repository location is always passed explicitly, never through the
//! process environment, so the metadata directory may live outside the
//! working tree.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::error::Result;

mod backend;
mod git;

pub use backend::VcsBackend;
pub use git::Git;

/// A working tree plus the directory holding its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub work_tree: PathBuf,
    pub git_dir: PathBuf,
}

impl Repository {
    pub fn new(work_tree: impl Into<PathBuf>, git_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_tree: work_tree.into(),
            git_dir: git_dir.into(),
        }
    }

    /// True when the metadata directory lives at `<work_tree>/.git`.
    pub fn is_standard_layout(&self) -> bool {
        self.git_dir == self.work_tree.join(crate::core::constants::GIT_DIR)
    }

    /// True once the metadata directory exists.
    pub fn exists(&self) -> bool {
        Path::new(&self.git_dir).is_dir()
    }
}

/// Version-control capability.
pub trait VersionControl {
    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Create an empty repository.
    fn init(&self, repo: &Repository) -> Result<()>;

    /// Clone `url` into the repository's working tree.
    fn clone_from(&self, url: &str, repo: &Repository) -> Result<()>;

    /// Stage paths (relative to the working tree), including deletions.
    fn add(&self, repo: &Repository, paths: &[PathBuf]) -> Result<()>;

    /// Commit staged changes. Does nothing when nothing is staged.
    fn commit(&self, repo: &Repository, message: &str) -> Result<()>;

    /// Set a repository-local config value.
    fn set_config(&self, repo: &Repository, key: &str, value: &str) -> Result<()>;

    /// Run an arbitrary command against the repository with inherited stdio.
    fn run(&self, repo: &Repository, args: &[String]) -> Result<ExitStatus>;
}
