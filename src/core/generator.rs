//! Password generation.
//!
//! Characters are drawn independently and uniformly, with replacement,
//! from the alphabet selected by a [`Policy`]. Randomness comes from the
//! operating system CSPRNG.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_LENGTH;
use crate::error::{Result, ValidationError};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Character-class policy for generated passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Number of characters
    pub length: usize,
    /// Include 0-9
    pub digits: bool,
    /// Include ASCII punctuation
    pub symbols: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            digits: true,
            symbols: true,
        }
    }
}

impl Policy {
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_digits(mut self, include: bool) -> Self {
        self.digits = include;
        self
    }

    pub fn with_symbols(mut self, include: bool) -> Self {
        self.symbols = include;
        self
    }

    /// The characters this policy draws from.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut pool = LETTERS.to_vec();
        if self.digits {
            pool.extend_from_slice(DIGITS);
        }
        if self.symbols {
            pool.extend_from_slice(SYMBOLS);
        }
        pool
    }
}

/// Generate a password under `policy`.
///
/// # Errors
///
/// Returns `ValidationError::ZeroLength` for a zero-length policy.
pub fn generate(policy: &Policy) -> Result<Zeroizing<String>> {
    if policy.length == 0 {
        return Err(ValidationError::ZeroLength.into());
    }

    let pool = policy.alphabet();
    let mut rng = OsRng;
    let mut password = Zeroizing::new(String::with_capacity(policy.length));
    for _ in 0..policy.length {
        // The pool always holds at least the 52 letters.
        if let Some(&c) = pool.choose(&mut rng) {
            password.push(c as char);
        }
    }
    Ok(password)
}
