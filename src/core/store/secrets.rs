//! Secret operations.
//!
//! Listing, reading, writing, removing and searching secrets.

use regex::Regex;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::{fs, Secrets, Store};
use crate::core::cipher::Cipher;
use crate::core::domain::{entry, Change, Entry, SecretPath};
use crate::core::generator::{self, Policy};
use crate::error::{Error, Result, StoreError};

/// Lines of one secret that matched a [`Store::grep`] pattern.
#[derive(Debug)]
pub struct GrepMatch {
    pub path: SecretPath,
    pub lines: Vec<Zeroizing<String>>,
}

impl Store {
    /// Every secret in the store, depth-first and sorted by name.
    ///
    /// Each call starts a fresh walk.
    pub fn list(&self) -> Secrets {
        Secrets::new(&self.root, &self.root, self.cipher.extension())
    }

    /// Every secret under the folder `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `prefix` is not a folder.
    pub fn list_under(&self, prefix: &SecretPath) -> Result<Secrets> {
        let dir = self.folder(prefix)?;
        if !dir.is_dir() {
            return Err(StoreError::NotFound(prefix.to_string()).into());
        }
        Ok(Secrets::new(&self.root, &dir, self.cipher.extension()))
    }

    /// Decrypt a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no such secret, or
    /// `CipherError::DecryptionFailed` if it cannot be decrypted.
    pub fn get(&self, path: &SecretPath) -> Result<Entry> {
        let file = self.secret_file(path)?;
        if !file.is_file() {
            return Err(StoreError::NotFound(path.to_string()).into());
        }
        debug!(path = %path, "reading secret");
        Ok(Entry::parse(self.read_secret(&file)?))
    }

    /// Encrypt `content` for the recipients of `path`, overwriting any
    /// existing secret.
    pub fn insert(&self, path: &SecretPath, content: &str) -> Result<Change> {
        let file = self.write_secret(path, content.as_bytes())?;
        Ok(Change::new(format!("Add given password for {path} to store.")).with_path(file))
    }

    /// Remove a secret, or a folder when `recursive` is set.
    ///
    /// A secret file takes precedence over a folder of the same name.
    /// Folders left empty are pruned up to the root.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RecursiveRequired` for a folder without
    /// `recursive` (nothing is deleted), or `StoreError::NotFound`.
    pub fn remove(&self, path: &SecretPath, recursive: bool) -> Result<Change> {
        let file = self.secret_file(path)?;
        let dir = self.folder(path)?;

        let (removed, rel) = if file.is_file() {
            std::fs::remove_file(&file)?;
            (file, path.to_file(self.cipher.extension()))
        } else if dir.is_dir() {
            if !recursive {
                return Err(StoreError::RecursiveRequired(path.to_string()).into());
            }
            std::fs::remove_dir_all(&dir)?;
            (dir, path.to_relative())
        } else {
            return Err(StoreError::NotFound(path.to_string()).into());
        };
        debug!(path = %path, recursive, "removed");

        if let Some(parent) = removed.parent() {
            fs::prune_empty_dirs(&self.root, parent);
        }
        Ok(Change::new(format!("Remove {path} from store.")).with_path(rel))
    }

    /// Generate a secret for `path` and store it.
    ///
    /// With `in_place`, only the first line of the existing secret is
    /// replaced and the rest is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroLength` for an empty policy, and
    /// `StoreError::NotFound` for `in_place` on a missing secret.
    pub fn generate(
        &self,
        path: &SecretPath,
        policy: &Policy,
        in_place: bool,
    ) -> Result<(Zeroizing<String>, Change)> {
        let password = generator::generate(policy)?;

        let change = if in_place {
            let existing = self.get(path)?;
            let content = entry::replace_first_line(existing.content(), &password);
            let file = self.write_secret(path, content.as_bytes())?;
            Change::new(format!("Replace generated password for {path}.")).with_path(file)
        } else {
            let file = self.write_secret(path, password.as_bytes())?;
            Change::new(format!("Add generated password for {path} to store.")).with_path(file)
        };

        Ok((password, change))
    }

    /// Secrets whose name contains any of `terms`, ignoring case.
    pub fn search<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<SecretPath>> {
        let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let mut found = Vec::new();
        for secret in self.list() {
            let secret = secret?;
            let name = secret.as_str().to_lowercase();
            if terms.iter().any(|t| name.contains(t.as_str())) {
                found.push(secret);
            }
        }
        Ok(found)
    }

    /// Decrypt every secret and collect the lines matching `pattern`.
    ///
    /// Secrets without a matching line are left out, as are secrets this
    /// identity cannot decrypt (logged at warn level).
    pub fn grep(&self, pattern: &Regex) -> Result<Vec<GrepMatch>> {
        let mut matches = Vec::new();
        for secret in self.list() {
            let secret = secret?;
            let entry = match self.get(&secret) {
                Ok(entry) => entry,
                Err(Error::Cipher(e)) => {
                    warn!(path = %secret, error = %e, "skipping secret that cannot be decrypted");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let lines: Vec<Zeroizing<String>> = entry
                .content()
                .lines()
                .filter(|line| pattern.is_match(line))
                .map(|line| Zeroizing::new(line.to_string()))
                .collect();
            if !lines.is_empty() {
                matches.push(GrepMatch {
                    path: secret,
                    lines,
                });
            }
        }
        Ok(matches)
    }
}
