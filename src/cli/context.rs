//! Store resolution for commands.
//!
//! Loads `config.toml`, applies the `--store`/`PASSWORD_STORE_DIR`
//! override, and opens the store with the configured backends.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::Config;
use crate::core::store::{Options, Store};
use crate::error::Result;

/// Configuration and store location for one invocation.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub root: PathBuf,
}

impl Context {
    /// Load configuration and resolve the store root.
    pub fn load(store: Option<PathBuf>) -> Result<Self> {
        let config = Config::load()?;
        let root = config.store_root(store.as_deref())?;
        debug!(root = %root.display(), "resolved store root");
        Ok(Self { config, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Backends built from configuration.
    pub fn options(&self) -> Result<Options> {
        Options::from_config(&self.config)
    }

    /// Open the existing store.
    pub fn open(&self) -> Result<Store> {
        Store::open(&self.root, self.options()?)
    }
}
