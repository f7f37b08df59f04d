//! Lazy listing of the secrets in a store.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

use crate::core::constants;
use crate::core::domain::SecretPath;
use crate::error::Result;

/// Depth-first walk yielding every secret under a directory.
///
/// The repository directory (`.git`) is not descended into; other
/// dot-directories are listed like any folder. Entries come out sorted by file name within each directory.
#[derive(Debug)]
pub struct Secrets {
    root: PathBuf,
    extension: &'static str,
    inner: FilterEntry<IntoIter, fn(&DirEntry) -> bool>,
}

/// False for repository metadata directories below the starting point.
pub(super) fn visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_type().is_dir() || entry.file_name() != constants::GIT_DIR
}

impl Secrets {
    /// Walk `start`, naming secrets relative to `root`.
    pub(crate) fn new(root: &Path, start: &Path, extension: &'static str) -> Self {
        let inner = WalkDir::new(start)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(visible as fn(&DirEntry) -> bool);
        Self {
            root: root.to_path_buf(),
            extension,
            inner,
        }
    }
}

impl Iterator for Secrets {
    type Item = Result<SecretPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension() != Some(OsStr::new(self.extension)) {
                continue;
            }
            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            match SecretPath::from_relative(&rel.with_extension("")) {
                Ok(secret) => return Some(Ok(secret)),
                Err(e) => debug!(path = %path.display(), error = %e, "skipping unnamed file"),
            }
        }
    }
}
