//! Git backend using the git CLI.
//!
//! Every invocation names the repository with `--git-dir` and
//! `--work-tree` and runs from inside the working tree.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output, Stdio};

use tracing::{debug, trace};

use super::{Repository, VersionControl};
use crate::error::{Result, ToolError};

/// Git via subprocess.
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the git binary is available.
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn check_git(&self) -> Result<()> {
        if !self.is_available() {
            return Err(ToolError::Missing(self.program.clone()).into());
        }
        Ok(())
    }

    fn command(&self, repo: &Repository) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--git-dir")
            .arg(&repo.git_dir)
            .arg("--work-tree")
            .arg(&repo.work_tree)
            .current_dir(&repo.work_tree);
        cmd
    }

    /// Run to completion, capturing output.
    fn output(&self, mut cmd: Command) -> Result<Output> {
        self.check_git()?;
        trace!(command = ?cmd, "running git");
        cmd.stdin(Stdio::null());
        cmd.output()
            .map_err(|source| {
                ToolError::Spawn {
                    tool: self.program.clone(),
                    source,
                }
                .into()
            })
    }

    /// Run to completion and fail on a non-zero exit.
    fn checked(&self, cmd: Command) -> Result<Output> {
        let output = self.output(cmd)?;
        if !output.status.success() {
            return Err(ToolError::Failed {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output)
    }

    /// True when the index differs from HEAD (or there is no HEAD yet).
    fn has_staged(&self, repo: &Repository) -> Result<bool> {
        let mut cmd = self.command(repo);
        cmd.args(["diff", "--cached", "--quiet"]);
        let output = self.output(cmd)?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(ToolError::Failed {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into()),
        }
    }
}

impl VersionControl for Git {
    fn name(&self) -> &'static str {
        "git"
    }

    fn init(&self, repo: &Repository) -> Result<()> {
        debug!(git_dir = %repo.git_dir.display(), "initializing repository");
        let mut cmd = self.command(repo);
        cmd.args(["init", "--quiet"]);
        self.checked(cmd)?;
        Ok(())
    }

    fn clone_from(&self, url: &str, repo: &Repository) -> Result<()> {
        debug!(url, work_tree = %repo.work_tree.display(), "cloning repository");
        let mut cmd = Command::new(&self.program);
        cmd.args(["clone", "--quiet"]);
        if !repo.is_standard_layout() {
            cmd.arg("--separate-git-dir").arg(&repo.git_dir);
        }
        cmd.arg("--").arg(url).arg(&repo.work_tree);
        self.checked(cmd)?;
        Ok(())
    }

    fn add(&self, repo: &Repository, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut cmd = self.command(repo);
        cmd.args(["add", "--all", "--"]).args(paths);
        self.checked(cmd)?;
        Ok(())
    }

    fn commit(&self, repo: &Repository, message: &str) -> Result<()> {
        if !self.has_staged(repo)? {
            debug!("nothing staged, skipping commit");
            return Ok(());
        }
        let mut cmd = self.command(repo);
        cmd.args(["commit", "--quiet", "-m", message]);
        self.checked(cmd)?;
        debug!(message, "committed");
        Ok(())
    }

    fn set_config(&self, repo: &Repository, key: &str, value: &str) -> Result<()> {
        let mut cmd = self.command(repo);
        cmd.args(["config", "--local", key, value]);
        self.checked(cmd)?;
        Ok(())
    }

    fn run(&self, repo: &Repository, args: &[String]) -> Result<ExitStatus> {
        self.check_git()?;
        let mut cmd = self.command(repo);
        cmd.args(args);
        cmd.status().map_err(|source| {
            ToolError::Spawn {
                tool: self.program.clone(),
                source,
            }
            .into()
        })
    }
}
