//! Configuration file management.
//!
//! Handles reading `config.toml` and resolving the store location.
//! A missing file is not an error: every setting has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::core::constants;
use crate::core::generator::Policy;
use crate::error::{ConfigError, Error, Result};

/// Encryption engine selected for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Gpg,
    Age,
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gpg" => Ok(Self::Gpg),
            "age" => Ok(Self::Age),
            other => Err(ConfigError::UnknownCipher(other.to_string()).into()),
        }
    }
}

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store root; `~/` is expanded
    pub store: Option<String>,
    /// Encryption engine
    pub cipher: CipherKind,
    /// Record history with git when the store has a repository
    pub git: bool,
    /// git binary
    pub git_program: String,
    /// Metadata directory, if not `<store>/.git`
    pub git_dir: Option<String>,
    pub gpg: GpgConfig,
    pub age: AgeConfig,
    pub generate: GenerateConfig,
}

/// `[gpg]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GpgConfig {
    pub program: String,
    /// Keyring directory passed as `--homedir`
    pub homedir: Option<String>,
    pub extra_args: Vec<String>,
}

/// `[age]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    /// Identity file holding `AGE-SECRET-KEY-...`
    pub identity: Option<String>,
}

/// `[generate]` section: defaults for generated passwords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub length: usize,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: None,
            cipher: CipherKind::default(),
            git: true,
            git_program: "git".to_string(),
            git_dir: None,
            gpg: GpgConfig::default(),
            age: AgeConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

impl Default for GpgConfig {
    fn default() -> Self {
        Self {
            program: "gpg".to_string(),
            homedir: None,
            extra_args: Vec::new(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        let policy = Policy::default();
        Self {
            length: policy.length,
            digits: policy.digits,
            symbols: policy.symbols,
        }
    }
}

impl Config {
    /// Default location: `$CELLAR_CONFIG`, else `<config dir>/cellar/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(cipher = ?config.cipher, git = config.git, "config loaded");
        Ok(config)
    }

    /// Expand a leading `~/` against the home directory.
    pub fn expand(&self, raw: &str) -> Result<PathBuf> {
        expand_home(raw)
    }

    /// Resolve the store root.
    ///
    /// Precedence: explicit override (flag or `PASSWORD_STORE_DIR`), then
    /// the `store` setting, then `~/.password-store`.
    pub fn store_root(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(store) = self.store.as_deref() {
            return expand_home(store);
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(constants::DEFAULT_STORE_DIR))
    }

    /// Metadata directory, when it does not live at `<store>/.git`.
    pub fn git_dir_override(&self) -> Result<Option<PathBuf>> {
        self.git_dir.as_deref().map(expand_home).transpose()
    }

    /// Default generation policy.
    pub fn policy(&self) -> Policy {
        Policy::default()
            .length(self.generate.length)
            .with_digits(self.generate.digits)
            .with_symbols(self.generate.symbols)
    }
}

fn expand_home(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return dirs::home_dir().ok_or_else(|| ConfigError::NoHomeDir.into());
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}
