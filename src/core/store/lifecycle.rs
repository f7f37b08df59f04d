//! Lifecycle operations.
//!
//! Recipient changes, re-encryption and enabling history for a store.

use std::path::PathBuf;

use tracing::{debug, info};

use super::{fs, Store};
use crate::core::cipher::Cipher;
use crate::core::constants;
use crate::core::domain::{Change, Recipients, SecretPath};
use crate::core::vcs::VersionControl;
use crate::error::{Result, StoreError, ValidationError};

impl Store {
    /// Write the recipient file for `subfolder`, or for the root when `None`.
    ///
    /// Existing secrets are not touched; follow with [`Store::reencrypt`]
    /// to re-key them.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoRecipients` if `recipients` is empty.
    pub fn set_recipients(
        &self,
        subfolder: Option<&SecretPath>,
        recipients: &Recipients,
    ) -> Result<Change> {
        if recipients.is_empty() {
            return Err(ValidationError::NoRecipients.into());
        }

        let rel_dir = subfolder.map(SecretPath::to_relative).unwrap_or_default();
        let dir = match subfolder {
            Some(sub) => self.folder(sub)?,
            None => self.root.clone(),
        };
        std::fs::create_dir_all(&dir)?;

        let rel = rel_dir.join(self.cipher.recipient_file());
        fs::write_atomic(&self.root.join(&rel), recipients.to_contents().as_bytes())?;

        let label = subfolder.map_or_else(|| "store root".to_string(), ToString::to_string);
        debug!(folder = %label, count = recipients.len(), "set recipients");
        Ok(Change::new(format!("Set recipients for {label} to {recipients}.")).with_path(rel))
    }

    /// Decrypt and re-encrypt the secret or folder `prefix` (everything
    /// when `None`) for its currently resolved recipients.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `prefix` names neither a secret
    /// nor a folder.
    pub fn reencrypt(&self, prefix: Option<&SecretPath>) -> Result<Change> {
        let secrets: Vec<SecretPath> = match prefix {
            Some(p) => {
                let mut secrets = Vec::new();
                if self.contains(p)? {
                    secrets.push(p.clone());
                }
                if self.is_dir(p)? {
                    for secret in self.list_under(p)? {
                        secrets.push(secret?);
                    }
                }
                if secrets.is_empty() {
                    return Err(StoreError::NotFound(p.to_string()).into());
                }
                secrets
            }
            None => self.list().collect::<Result<_>>()?,
        };

        let label = prefix.map_or_else(|| "store".to_string(), ToString::to_string);
        let mut change = Change::new(format!("Re-encrypt {label} for its current recipients."));
        for secret in &secrets {
            let entry = self.get(secret)?;
            change = change.with_path(self.write_secret(secret, entry.content().as_bytes())?);
        }

        info!(count = secrets.len(), "re-encrypted secrets");
        Ok(change)
    }

    /// Create the repository if needed and teach git to diff secrets
    /// through the cipher.
    ///
    /// The returned change covers the whole store.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Disabled` when version control is turned off.
    pub fn enable_version_control(&self) -> Result<Change> {
        if !self.repo.exists() {
            self.vcs.init(&self.repo)?;
        }

        let ext = self.cipher.extension();
        let attributes = self.root.join(constants::GIT_ATTRIBUTES);
        let line = format!("*.{ext} diff={ext}");
        let mut contents = match std::fs::read_to_string(&attributes) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        if !contents.lines().any(|l| l.trim() == line) {
            if !contents.is_empty() && !contents.ends_with('\n') {
                contents.push('\n');
            }
            contents.push_str(&line);
            contents.push('\n');
            std::fs::write(&attributes, contents)?;
        }

        self.vcs
            .set_config(&self.repo, &format!("diff.{ext}.binary"), "true")?;
        self.vcs
            .set_config(&self.repo, &format!("diff.{ext}.textconv"), &self.cipher.textconv())?;

        debug!(git_dir = %self.repo.git_dir.display(), "version control enabled");
        Ok(Change::new("Add current contents of password store.").with_path(PathBuf::from(".")))
    }
}
