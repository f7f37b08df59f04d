//! Age encryption backend implementation.
//!
//! Provides encryption/decryption using the age format with x25519 keys
//! and ASCII armor encoding. Runs in-process; no external binary needed.

use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use ::age::x25519;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::domain::Recipients;
use crate::error::{CipherError, ConfigError, Result};

/// Age-based cryptographic backend using x25519 keys.
pub struct Age {
    identity: x25519::Identity,
    identity_path: Option<PathBuf>,
}

impl fmt::Debug for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Age")
            .field("identity", &"[REDACTED]")
            .field("identity_path", &self.identity_path)
            .finish()
    }
}

impl Age {
    /// Backend decrypting with an in-memory identity.
    pub fn new(identity: x25519::Identity) -> Self {
        Self {
            identity,
            identity_path: None,
        }
    }

    /// Load the identity from an age key file (`AGE-SECRET-KEY-...`).
    ///
    /// Blank lines and `#` comments are skipped; the first key line is used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or
    /// `ConfigError::InvalidIdentity` if no valid key is found.
    pub fn from_identity_file(path: &Path) -> Result<Self> {
        let contents = Zeroizing::new(fs::read_to_string(path).map_err(|source| {
            ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        })?);

        let line = contents
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'))
            .ok_or_else(|| ConfigError::InvalidIdentity {
                path: path.to_path_buf(),
                reason: "no key found".to_string(),
            })?;

        let identity: x25519::Identity =
            line.parse()
                .map_err(|e: &str| ConfigError::InvalidIdentity {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            identity,
            identity_path: Some(path.to_path_buf()),
        })
    }

    /// Public key of the loaded identity.
    pub fn public_key(&self) -> String {
        self.identity.to_public().to_string()
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn extension(&self) -> &'static str {
        "age"
    }

    fn recipient_file(&self) -> &'static str {
        ".age-recipients"
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &Recipients) -> Result<Vec<u8>> {
        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let parsed = recipients
            .iter()
            .map(|r| parse_recipient(r))
            .collect::<Result<Vec<_>>>()?;
        if parsed.is_empty() {
            return Err(CipherError::EncryptionFailed("no recipients provided".to_string()).into());
        }

        let encryptor =
            age::Encryptor::with_recipients(parsed.iter().map(|r| r as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(age::armor::ArmoredWriter::wrap_output(
                &mut encrypted,
                age::armor::Format::AsciiArmor,
            )?)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer.write_all(plaintext)?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("armor: {}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let reader = age::armor::ArmoredReader::new(ciphertext);
        let decryptor = age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Zeroizing::new(Vec::new());
        let mut reader = decryptor
            .decrypt(std::iter::once(&self.identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }

    fn textconv(&self) -> String {
        match &self.identity_path {
            Some(path) => format!("age -d -i {}", path.display()),
            None => "age -d".to_string(),
        }
    }
}

/// Parse a public key string into an age recipient.
///
/// # Errors
///
/// Returns `CipherError::InvalidRecipient` if the key format is invalid.
pub fn parse_recipient(key: &str) -> Result<x25519::Recipient> {
    key.parse::<x25519::Recipient>()
        .map_err(|_| CipherError::InvalidRecipient(key.to_string()).into())
}
