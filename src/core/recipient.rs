//! Recipient resolution.
//!
//! A secret is encrypted for the identities in the nearest recipient file,
//! found by walking from the secret's directory up to the store root. A
//! sub-folder can therefore narrow (or widen) its audience without
//! touching the rest of the store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::domain::Recipients;
use crate::error::{ConfigError, Result};

/// Locate the nearest recipient file for `dir`, stopping at `root`.
///
/// Returns `Ok(None)` when no file exists between `dir` and `root`.
///
/// # Errors
///
/// Returns `ConfigError::OutsideStore` if `dir` is not `root` or below it.
pub fn find(root: &Path, dir: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    if !dir.starts_with(root) {
        return Err(ConfigError::OutsideStore {
            dir: dir.to_path_buf(),
            root: root.to_path_buf(),
        }
        .into());
    }

    let mut current = dir;
    loop {
        let candidate = current.join(file_name);
        trace!(path = %candidate.display(), "checking for recipient file");
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        if current == root {
            return Ok(None);
        }
        current = match current.parent() {
            Some(parent) => parent,
            None => return Ok(None),
        };
    }
}

/// Read a recipient file.
pub fn read(path: &Path) -> Result<Recipients> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let recipients = Recipients::parse(&contents);
    if recipients.is_empty() {
        return Err(ConfigError::EmptyRecipients(path.to_path_buf()).into());
    }
    Ok(recipients)
}

/// Resolve the recipients governing secrets stored in `dir`.
///
/// # Errors
///
/// Returns `ConfigError::NoRecipients` when no recipient file exists on the
/// way up to (and including) the root, and `ConfigError::EmptyRecipients`
/// when the nearest one lists nobody.
pub fn resolve(root: &Path, dir: &Path, file_name: &str) -> Result<Recipients> {
    let path = find(root, dir, file_name)?.ok_or_else(|| ConfigError::NoRecipients {
        root: root.to_path_buf(),
        file: file_name.to_string(),
    })?;
    let recipients = read(&path)?;
    debug!(
        file = %path.display(),
        recipients = recipients.len(),
        "resolved recipients"
    );
    Ok(recipients)
}
