//! Filesystem helpers for the store.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::trace;
use walkdir::WalkDir;

use crate::error::{Result, StoreError};

/// Write `bytes` to `path` via a temp file in the same directory and a rename.
///
/// A crash or error leaves either the old file or the new one, never a
/// partial write. The temp file is created 0600 on Unix.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    trace!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(())
}

/// Recursively copy the directory `src` to `dst`.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let target = dst.join(rel);
        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Remove empty directories from `start` upward, stopping below `root`.
pub fn prune_empty_dirs(root: &Path, start: &Path) {
    let mut current = start;
    while current != root && current.starts_with(root) {
        if fs::remove_dir(current).is_err() {
            break;
        }
        trace!(dir = %current.display(), "removed empty directory");
        current = match current.parent() {
            Some(parent) => parent,
            None => break,
        };
    }
}

/// Fail unless `candidate` stays under `root` once symlinks are resolved.
///
/// `root` must already be canonical. The deepest existing ancestor of
/// `candidate` (possibly `candidate` itself) is canonicalized and checked.
pub fn ensure_within(root: &Path, candidate: &Path, name: &str) -> Result<()> {
    let mut existing = candidate;
    while !existing.exists() {
        existing = match existing.parent() {
            Some(parent) => parent,
            None => break,
        };
    }
    let resolved = existing.canonicalize()?;
    if !resolved.starts_with(root) {
        return Err(StoreError::Escape(name.to_string()).into());
    }
    Ok(())
}
