//! Cryptographic operations.
//!
//! The store never touches ciphertext formats itself; it hands plaintext and
//! a recipient set to a [`Cipher`] and writes back whatever bytes it gets.
//!
//! ## Backends
//!
//! - **gpg**: Default. Shells out to the `gpg` binary; recipients are key
//!   ids, fingerprints or e-mail addresses listed in `.gpg-id`.
//! - **age**: In-process x25519 encryption; recipients are `age1...`
//!   public keys listed in `.age-recipients`.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Add a variant to `CipherBackend`

use zeroize::Zeroizing;

use crate::core::domain::Recipients;
use crate::error::Result;

mod age;
mod backend;
mod gpg;

pub use age::{parse_recipient, Age};
pub use backend::CipherBackend;
pub use gpg::Gpg;

/// Cryptographic backend trait.
///
/// Each backend also owns the on-disk naming that goes with its format:
/// the secret file extension and the recipient file name.
pub trait Cipher {
    /// Backend name for display/config.
    fn name(&self) -> &'static str;

    /// Extension of encrypted secret files, without the dot.
    fn extension(&self) -> &'static str;

    /// Name of the per-directory recipient file.
    fn recipient_file(&self) -> &'static str;

    /// Encrypt plaintext for every recipient.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the engine rejects the
    /// input or a recipient.
    fn encrypt(&self, plaintext: &[u8], recipients: &Recipients) -> Result<Vec<u8>>;

    /// Decrypt ciphertext produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if no usable key is available
    /// or the ciphertext is corrupt.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Shell command that decrypts a file given as its last argument.
    ///
    /// Used for git's `diff.<ext>.textconv`.
    fn textconv(&self) -> String;
}
