//! Error types.
//!
//! Every fallible operation in cellar returns [`Result`]. Errors are grouped
//! by the layer that produced them so the CLI can attach hints.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for a missing secret or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::NotFound(_) | StoreError::MissingField { .. })
        )
    }

    /// True when the operation refused to clobber or recurse without confirmation.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::RecursiveRequired(_) | StoreError::AlreadyExists(_))
        )
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        match e.into_io_error() {
            Some(io) => Error::Io(io),
            None => Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "filesystem loop detected",
            )),
        }
    }
}

/// Configuration and recipient-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("password store not found at {0}")]
    NotInitialized(PathBuf),

    #[error("no recipient file ({file}) found in {root} or any directory below it")]
    NoRecipients { root: PathBuf, file: String },

    #[error("recipient file {0} lists no identities")]
    EmptyRecipients(PathBuf),

    #[error("{dir} is outside the password store at {root}")]
    OutsideStore { dir: PathBuf, root: PathBuf },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown cipher: {0}. Supported: gpg, age")]
    UnknownCipher(String),

    #[error("age backend needs an identity file: set [age] identity in config.toml")]
    MissingIdentity,

    #[error("invalid age identity in {path}: {reason}")]
    InvalidIdentity { path: PathBuf, reason: String },

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Errors from the on-disk store layout.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} is not in the password store")]
    NotFound(String),

    #[error("{0} is a directory: pass --recursive to remove it")]
    RecursiveRequired(String),

    #[error("{0} already exists: pass --force to overwrite")]
    AlreadyExists(String),

    #[error("{0} resolves outside the password store")]
    Escape(String),

    #[error("{path} has no {field} field")]
    MissingField { path: String, field: String },
}

/// Errors raised by a cipher backend.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("decrypted content is not valid UTF-8")]
    NotUtf8,
}

/// Failures of external programs (gpg, git, editor).
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} not found in PATH")]
    Missing(String),

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("{0} support is disabled in config.toml")]
    Disabled(String),

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid secret path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("password length must be at least 1")]
    ZeroLength,

    #[error("unknown field '{0}'. Supported: password, username, hostname")]
    UnknownField(String),

    #[error("no recipients given")]
    NoRecipients,

    #[error("{0} is empty")]
    EmptyValue(String),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
