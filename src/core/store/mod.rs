//! The password store.
//!
//! Store maps secret names onto encrypted files under a root directory and
//! owns the cipher and version-control backends used to manage them.
//! Mutating operations return a [`Change`]; hand it to [`Store::record`]
//! to commit it when the store keeps history.

mod fs;
mod lifecycle;
mod secrets;
mod transfer;
mod walk;

pub use secrets::GrepMatch;
pub use walk::Secrets;

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tracing::debug;
use walkdir::WalkDir;
use zeroize::{Zeroize, Zeroizing};

use crate::core::cipher::{Cipher, CipherBackend};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{Change, Recipients, SecretPath};
use crate::core::recipient;
use crate::core::vcs::{Repository, VcsBackend, VersionControl};
use crate::error::{CipherError, ConfigError, Result, ValidationError};

/// Backends and layout used to open or create a store.
#[derive(Debug, Default)]
pub struct Options {
    pub cipher: CipherBackend,
    pub vcs: VcsBackend,
    /// Metadata directory; `<root>/.git` when unset
    pub git_dir: Option<PathBuf>,
}

impl Options {
    pub fn new(cipher: CipherBackend) -> Self {
        Self {
            cipher,
            vcs: VcsBackend::default(),
            git_dir: None,
        }
    }

    /// Build backends from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the cipher backend cannot be created, e.g. the
    /// age identity file is missing or invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            cipher: CipherBackend::from_config(config)?,
            vcs: VcsBackend::from_config(config),
            git_dir: config.git_dir_override()?,
        })
    }

    pub fn with_vcs(mut self, vcs: VcsBackend) -> Self {
        self.vcs = vcs;
        self
    }

    pub fn with_git_dir(mut self, git_dir: impl Into<PathBuf>) -> Self {
        self.git_dir = Some(git_dir.into());
        self
    }
}

/// A password store rooted at a directory.
#[derive(Debug)]
pub struct Store {
    pub(super) root: PathBuf,
    pub(super) repo: Repository,
    pub(super) cipher: CipherBackend,
    pub(super) vcs: VcsBackend,
}

impl Store {
    /// Open an existing store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if `root` is not a directory.
    /// Returns `ConfigError::NoRecipients` if no recipient file exists at the
    /// root or anywhere below it.
    pub fn open(root: impl AsRef<Path>, options: Options) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConfigError::NotInitialized(root.to_path_buf()).into());
        }
        let root = root.canonicalize()?;

        let file_name = options.cipher.recipient_file();
        if !has_recipient_file(&root, file_name) {
            return Err(ConfigError::NoRecipients {
                root,
                file: file_name.to_string(),
            }
            .into());
        }

        let git_dir = options
            .git_dir
            .unwrap_or_else(|| root.join(constants::GIT_DIR));
        let repo = Repository::new(&root, git_dir);

        debug!(
            root = %root.display(),
            cipher = options.cipher.name(),
            vcs = options.vcs.name(),
            "opened store"
        );
        Ok(Self {
            root,
            repo,
            cipher: options.cipher,
            vcs: options.vcs,
        })
    }

    /// Create a store, or adopt an existing directory as one.
    ///
    /// Creates `root` if needed and clones `clone_url` into it when given.
    /// The root recipient file is written only if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoRecipients` if `recipients` is empty and
    /// there is nothing to clone, or any error from cloning or
    /// [`Store::open`].
    pub fn initialize(
        recipients: &Recipients,
        root: impl AsRef<Path>,
        clone_url: Option<&str>,
        options: Options,
    ) -> Result<Self> {
        let root = root.as_ref();
        if recipients.is_empty() && clone_url.is_none() {
            return Err(ValidationError::NoRecipients.into());
        }
        std::fs::create_dir_all(root)?;

        if let Some(url) = clone_url {
            let git_dir = options
                .git_dir
                .clone()
                .unwrap_or_else(|| root.join(constants::GIT_DIR));
            options.vcs.clone_from(url, &Repository::new(root, git_dir))?;
        }

        let file = root.join(options.cipher.recipient_file());
        if file.exists() {
            debug!(file = %file.display(), "keeping existing recipient file");
        } else if !recipients.is_empty() {
            fs::write_atomic(&file, recipients.to_contents().as_bytes())?;
            debug!(file = %file.display(), count = recipients.len(), "wrote recipient file");
        }

        Self::open(root, options)
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn cipher(&self) -> &CipherBackend {
        &self.cipher
    }

    /// True when changes are committed: git is enabled and the metadata
    /// directory exists.
    pub fn uses_version_control(&self) -> bool {
        self.vcs.is_enabled() && self.repo.exists()
    }

    /// Stage and commit a change. No-op without version control.
    pub fn record(&self, change: &Change) -> Result<()> {
        if change.is_empty() || !self.uses_version_control() {
            debug!(message = change.message(), "not recording change");
            return Ok(());
        }
        self.vcs.add(&self.repo, change.paths())?;
        self.vcs.commit(&self.repo, change.message())
    }

    /// Run a version-control command against the store with inherited stdio.
    pub fn run_vcs(&self, args: &[String]) -> Result<ExitStatus> {
        self.vcs.run(&self.repo, args)
    }

    /// Recipients that apply to `path`.
    pub fn recipients_for(&self, path: &SecretPath) -> Result<Recipients> {
        let file = self.root.join(path.to_file(self.cipher.extension()));
        let dir = file.parent().unwrap_or(&self.root);
        recipient::resolve(&self.root, dir, self.cipher.recipient_file())
    }

    /// True if a secret file exists for `path`.
    pub fn contains(&self, path: &SecretPath) -> Result<bool> {
        Ok(self.secret_file(path)?.is_file())
    }

    /// True if `path` names a folder.
    pub fn is_dir(&self, path: &SecretPath) -> Result<bool> {
        Ok(self.folder(path)?.is_dir())
    }

    /// Absolute file for a secret, checked to stay inside the root.
    pub(super) fn secret_file(&self, path: &SecretPath) -> Result<PathBuf> {
        let file = self.root.join(path.to_file(self.cipher.extension()));
        fs::ensure_within(&self.root, &file, path.as_str())?;
        Ok(file)
    }

    /// Absolute folder for a path, checked to stay inside the root.
    pub(super) fn folder(&self, path: &SecretPath) -> Result<PathBuf> {
        let dir = self.root.join(path.to_relative());
        fs::ensure_within(&self.root, &dir, path.as_str())?;
        Ok(dir)
    }

    /// Encrypt `plaintext` for the recipients of `path` and write it.
    ///
    /// Returns the file's root-relative path.
    pub(super) fn write_secret(&self, path: &SecretPath, plaintext: &[u8]) -> Result<PathBuf> {
        let file = self.secret_file(path)?;
        let dir = file.parent().unwrap_or(&self.root);
        let recipients = recipient::resolve(&self.root, dir, self.cipher.recipient_file())?;
        let ciphertext = self.cipher.encrypt(plaintext, &recipients)?;

        std::fs::create_dir_all(dir)?;
        fs::write_atomic(&file, &ciphertext)?;
        debug!(path = %path, recipients = recipients.len(), "wrote secret");
        Ok(path.to_file(self.cipher.extension()))
    }

    /// Decrypt a secret file into a string.
    pub(super) fn read_secret(&self, file: &Path) -> Result<Zeroizing<String>> {
        let ciphertext = std::fs::read(file)?;
        let plaintext = self.cipher.decrypt(&ciphertext)?;
        into_string(plaintext)
    }
}

fn has_recipient_file(root: &Path, file_name: &str) -> bool {
    if root.join(file_name).is_file() {
        return true;
    }
    WalkDir::new(root)
        .into_iter()
        .filter_entry(walk::visible)
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file() && e.file_name() == file_name)
}

fn into_string(mut bytes: Zeroizing<Vec<u8>>) -> Result<Zeroizing<String>> {
    match String::from_utf8(std::mem::take(&mut *bytes)) {
        Ok(text) => Ok(Zeroizing::new(text)),
        Err(e) => {
            e.into_bytes().zeroize();
            Err(CipherError::NotUtf8.into())
        }
    }
}
