//! Secret path type.
//!
//! A slash-separated name relative to the store root, e.g. `Email/bob.net`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::constants;
use crate::error::{Error, Result, ValidationError};

/// A validated, root-relative secret name.
///
/// Never absolute and never contains `.` or `..` components, so joining it
/// onto the root cannot climb out lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecretPath(String);

impl SecretPath {
    /// Parse and validate a user-supplied name. Trailing slashes are dropped.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| -> Error {
            ValidationError::InvalidPath {
                path: raw.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(invalid("path is empty"));
        }
        if trimmed.starts_with('/') {
            return Err(invalid("path must be relative to the store"));
        }
        if trimmed.contains('\\') || trimmed.contains('\0') {
            return Err(invalid("path contains a backslash or NUL byte"));
        }
        for component in trimmed.split('/') {
            match component {
                "" => return Err(invalid("path contains an empty component")),
                "." | ".." => return Err(invalid("path may not contain '.' or '..'")),
                constants::GIT_DIR => return Err(invalid("path may not enter the repository")),
                _ => {}
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Build from a path relative to the root, as found while walking.
    pub(crate) fn from_relative(rel: &Path) -> Result<Self> {
        let joined = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(&joined)
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last component.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Parent folder, if the path is nested.
    pub fn parent(&self) -> Option<SecretPath> {
        self.0.rsplit_once('/').map(|(p, _)| SecretPath(p.to_string()))
    }

    /// Append a child name.
    pub fn join(&self, child: &str) -> Result<SecretPath> {
        Self::parse(&format!("{}/{}", self.0, child))
    }

    /// True if `self` equals `prefix` or lies beneath it.
    pub fn starts_with(&self, prefix: &SecretPath) -> bool {
        self.0 == prefix.0
            || (self.0.starts_with(&prefix.0) && self.0[prefix.0.len()..].starts_with('/'))
    }

    /// Relative filesystem path for this name (no extension).
    pub fn to_relative(&self) -> PathBuf {
        self.0.split('/').collect()
    }

    /// Relative path of the encrypted file with the given extension.
    pub fn to_file(&self, extension: &str) -> PathBuf {
        let mut path = self.to_relative();
        let file = format!("{}.{}", self.name(), extension);
        path.set_file_name(file);
        path
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SecretPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for SecretPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
