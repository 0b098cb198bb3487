//! Thin wrappers over the `git` executable

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::{Error, Result};

use super::ssh::validate_ssh_executable;

/// Repository operations needed by the clone and configure commands
pub trait GitOps {
    /// Clone `url` into the working directory, streaming git's output
    fn clone_repo(&self, url: &str) -> Result<()>;

    /// Write `key = value` to the repository's local configuration
    fn set_local_config(&self, key: &str, value: &str) -> Result<()>;

    /// Check whether the working directory is inside a git work tree
    fn is_inside_repo(&self) -> bool;

    /// Read the global `core.sshCommand` and return it if it is a bare
    /// path to an existing executable
    fn resolve_global_ssh_executable(&self) -> Result<String>;
}

/// [`GitOps`] backed by the `git` command line
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Path to the git executable
    git_path: String,
    /// Directory git runs in (defaults to the process working directory)
    workdir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Create a wrapper for `git` found on the PATH
    pub fn new() -> Self {
        Self {
            git_path: "git".to_string(),
            workdir: None,
        }
    }

    /// Use a custom path to the git executable
    pub fn with_git_path(mut self, path: impl Into<String>) -> Self {
        self.git_path = path.into();
        self
    }

    /// Run git in `workdir` instead of the process working directory
    pub fn with_workdir(mut self, workdir: impl AsRef<Path>) -> Self {
        self.workdir = Some(workdir.as_ref().to_path_buf());
        self
    }

    /// Path to the git executable
    pub fn git_path(&self) -> &str {
        &self.git_path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.git_path);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Git(format!(
                "git executable not found at '{}'. Is git installed?",
                self.git_path
            ))
        } else {
            Error::Io(e)
        }
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!(git = %self.git_path, ?args, "Running git");
        self.command()
            .args(args)
            .output()
            .map_err(|e| self.spawn_error(e))
    }
}

impl GitOps for GitCli {
    fn clone_repo(&self, url: &str) -> Result<()> {
        tracing::debug!(git = %self.git_path, url, "Running git clone");

        let status = self
            .command()
            .arg("clone")
            .arg(url)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(Error::Git(format!(
                "error cloning repository: git clone exited with {}",
                status
            )));
        }

        Ok(())
    }

    fn set_local_config(&self, key: &str, value: &str) -> Result<()> {
        let output = self.output(&["config", "--local", key, value])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "git config --local {} failed ({}): {}",
                key,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn is_inside_repo(&self) -> bool {
        self.command()
            .args(["rev-parse", "--is-inside-work-tree"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn resolve_global_ssh_executable(&self) -> Result<String> {
        let output = self
            .output(&["config", "--global", "core.sshCommand"])
            .map_err(|e| {
                Error::GlobalSshCommand(format!("error retrieving global core.sshCommand: {}", e))
            })?;

        if !output.status.success() {
            return Err(Error::GlobalSshCommand(format!(
                "error retrieving global core.sshCommand: git config exited with {}",
                output.status
            )));
        }

        validate_ssh_executable(&String::from_utf8_lossy(&output.stdout))
    }
}
