//! Constants used throughout cellar.
//!
//! Centralizes file names, environment variables and defaults.

/// Default store directory relative to HOME (~/.password-store).
pub const DEFAULT_STORE_DIR: &str = ".password-store";

/// Environment variable overriding the store root.
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// Environment variable pointing at an alternate config.toml.
pub const CONFIG_ENV: &str = "CELLAR_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CELLAR_LOG";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "cellar";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Version-control metadata directory inside the store root.
pub const GIT_DIR: &str = ".git";

/// Git attributes file written by `git init`.
pub const GIT_ATTRIBUTES: &str = ".gitattributes";

/// Default generated password length.
pub const DEFAULT_LENGTH: usize = 15;

/// Editor used when neither VISUAL nor EDITOR is set.
pub const DEFAULT_EDITOR: &str = "vi";
