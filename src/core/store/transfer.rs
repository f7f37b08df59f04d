//! Rename and copy.
//!
//! Ciphertext is moved byte for byte; it is not re-encrypted for the
//! destination's recipients. A warning is logged when those differ.

use std::path::Path;

use tracing::{debug, warn};

use super::{fs, Store};
use crate::core::cipher::Cipher;
use crate::core::domain::{Change, Recipients, SecretPath};
use crate::core::recipient;
use crate::error::{Result, StoreError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Rename,
    Copy,
}

impl Store {
    /// Move a secret or folder.
    ///
    /// When `new` is an existing folder the source lands inside it under
    /// its own name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `old` does not exist, or
    /// `StoreError::AlreadyExists` if the destination exists and `force`
    /// is not set. A destination that resolves to `old` itself is a
    /// `ValidationError` even with `force`.
    pub fn rename(&self, old: &SecretPath, new: &SecretPath, force: bool) -> Result<Change> {
        self.transfer(old, new, force, Mode::Rename)
    }

    /// Copy a secret or folder. Same rules as [`Store::rename`].
    pub fn copy(&self, old: &SecretPath, new: &SecretPath, force: bool) -> Result<Change> {
        self.transfer(old, new, force, Mode::Copy)
    }

    fn transfer(
        &self,
        old: &SecretPath,
        new: &SecretPath,
        force: bool,
        mode: Mode,
    ) -> Result<Change> {
        let ext = self.cipher.extension();
        let old_file = self.secret_file(old)?;
        let old_dir = self.folder(old)?;
        let into_folder = self.folder(new)?.is_dir();
        let target = if into_folder {
            new.join(old.name())?
        } else {
            new.clone()
        };
        if target == *old {
            return Err(ValidationError::InvalidPath {
                path: new.to_string(),
                reason: format!("{old} is already there"),
            }
            .into());
        }

        let (source, source_rel, dest, dest_rel) = if old_file.is_file() {
            (
                old_file,
                old.to_file(ext),
                self.secret_file(&target)?,
                target.to_file(ext),
            )
        } else if old_dir.is_dir() {
            if target.starts_with(old) {
                return Err(ValidationError::InvalidPath {
                    path: new.to_string(),
                    reason: format!("cannot place {old} inside itself"),
                }
                .into());
            }
            (
                old_dir,
                old.to_relative(),
                self.folder(&target)?,
                target.to_relative(),
            )
        } else {
            return Err(StoreError::NotFound(old.to_string()).into());
        };

        if dest.exists() {
            if !force {
                return Err(StoreError::AlreadyExists(target.to_string()).into());
            }
            if dest.is_dir() {
                std::fs::remove_dir_all(&dest)?;
            }
        }

        let before = self.recipients_at(&source);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match mode {
            Mode::Rename => std::fs::rename(&source, &dest)?,
            Mode::Copy if source.is_dir() => fs::copy_dir(&source, &dest)?,
            Mode::Copy => {
                std::fs::copy(&source, &dest)?;
            }
        }
        debug!(from = %old, to = %target, ?mode, "transferred");

        if before.is_some() && before != self.recipients_at(&dest) {
            warn!(
                from = %old,
                to = %target,
                "destination has different recipients; run reencrypt to re-key"
            );
        }

        let change = match mode {
            Mode::Rename => {
                if let Some(parent) = source.parent() {
                    fs::prune_empty_dirs(&self.root, parent);
                }
                Change::new(format!("Rename {old} to {target}."))
                    .with_path(source_rel)
                    .with_path(dest_rel)
            }
            Mode::Copy => Change::new(format!("Copy {old} to {target}.")).with_path(dest_rel),
        };
        Ok(change)
    }

    /// Recipients governing a secret file or folder, if resolvable.
    fn recipients_at(&self, path: &Path) -> Option<Recipients> {
        let dir = if path.is_dir() { path } else { path.parent()? };
        recipient::resolve(&self.root, dir, self.cipher.recipient_file()).ok()
    }
}
