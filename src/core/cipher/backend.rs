//! Cipher backend selection and dispatch.
//!
//! - **Gpg** (default): gpg CLI, `.gpg` files, `.gpg-id` recipient files
//! - **Age**: in-process age, `.age` files, `.age-recipients` recipient files

use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use super::{Age, Cipher, Gpg};
use crate::core::config::{CipherKind, Config};
use crate::core::domain::Recipients;
use crate::error::{ConfigError, Result};

/// Cipher backend for store operations.
#[derive(Debug)]
pub enum CipherBackend {
    /// GPG encryption via the gpg CLI
    Gpg(Gpg),

    /// Age encryption
    Age(Age),
}

impl CipherBackend {
    /// Create a cipher backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingIdentity` when age is selected without
    /// an identity file, or the error from loading that file.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.cipher {
            CipherKind::Gpg => {
                debug!(program = %config.gpg.program, "creating gpg cipher backend");
                let mut gpg = Gpg::new(config.gpg.program.clone())
                    .with_extra_args(config.gpg.extra_args.clone());
                if let Some(home) = config.gpg.homedir.as_deref() {
                    gpg = gpg.with_homedir(config.expand(home)?);
                }
                Ok(Self::Gpg(gpg))
            }
            CipherKind::Age => {
                let path: PathBuf = match config.age.identity.as_deref() {
                    Some(p) => config.expand(p)?,
                    None => return Err(ConfigError::MissingIdentity.into()),
                };
                debug!(identity = %path.display(), "creating age cipher backend");
                Ok(Self::Age(Age::from_identity_file(&path)?))
            }
        }
    }

    fn inner(&self) -> &dyn Cipher {
        match self {
            Self::Gpg(gpg) => gpg,
            Self::Age(age) => age,
        }
    }
}

impl Default for CipherBackend {
    fn default() -> Self {
        Self::Gpg(Gpg::default())
    }
}

impl Cipher for CipherBackend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn extension(&self) -> &'static str {
        self.inner().extension()
    }

    fn recipient_file(&self) -> &'static str {
        self.inner().recipient_file()
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &Recipients) -> Result<Vec<u8>> {
        self.inner().encrypt(plaintext, recipients)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.inner().decrypt(ciphertext)
    }

    fn textconv(&self) -> String {
        self.inner().textconv()
    }
}
