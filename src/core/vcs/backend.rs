//! Version-control backend selection and dispatch.

use std::path::PathBuf;
use std::process::ExitStatus;

use tracing::debug;

use super::{Git, Repository, VersionControl};
use crate::core::config::Config;
use crate::error::{Result, ToolError};

/// Version-control backend for a store.
#[derive(Debug, Clone)]
pub enum VcsBackend {
    /// git CLI
    Git(Git),

    /// No history is recorded.
    Disabled,
}

impl VcsBackend {
    /// Create a backend from configuration.
    pub fn from_config(config: &Config) -> Self {
        if config.git {
            debug!(program = %config.git_program, "creating git backend");
            Self::Git(Git::new(config.git_program.clone()))
        } else {
            debug!("version control disabled");
            Self::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Git(_))
    }
}

impl Default for VcsBackend {
    fn default() -> Self {
        Self::Git(Git::default())
    }
}

impl VersionControl for VcsBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Git(git) => git.name(),
            Self::Disabled => "disabled",
        }
    }

    fn init(&self, repo: &Repository) -> Result<()> {
        match self {
            Self::Git(git) => git.init(repo),
            Self::Disabled => Err(ToolError::Disabled("git".to_string()).into()),
        }
    }

    fn clone_from(&self, url: &str, repo: &Repository) -> Result<()> {
        match self {
            Self::Git(git) => git.clone_from(url, repo),
            Self::Disabled => Err(ToolError::Disabled("git".to_string()).into()),
        }
    }

    fn add(&self, repo: &Repository, paths: &[PathBuf]) -> Result<()> {
        match self {
            Self::Git(git) => git.add(repo, paths),
            Self::Disabled => Ok(()),
        }
    }

    fn commit(&self, repo: &Repository, message: &str) -> Result<()> {
        match self {
            Self::Git(git) => git.commit(repo, message),
            Self::Disabled => Ok(()),
        }
    }

    fn set_config(&self, repo: &Repository, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Git(git) => git.set_config(repo, key, value),
            Self::Disabled => Ok(()),
        }
    }

    fn run(&self, repo: &Repository, args: &[String]) -> Result<ExitStatus> {
        match self {
            Self::Git(git) => git.run(repo, args),
            Self::Disabled => Err(ToolError::Disabled("git".to_string()).into()),
        }
    }
}
