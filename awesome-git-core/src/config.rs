//! Configuration management for awesome-git
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (AWESOME_GIT_GIT_PATH, SSH_COMMAND)
//! 3. Config file (~/.config/awesome-git/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::git::DEFAULT_CONFIGURE_SSH_COMMAND;
use crate::{Error, Result};

/// Default value written to `user.email`
pub const DEFAULT_EMAIL: &str = "firstname.lastname@example.com";

/// Default value written to `pull.rebase`
pub const DEFAULT_PULL_REBASE: &str = "true";

/// Environment variable overriding the git executable
pub const GIT_PATH_ENV: &str = "AWESOME_GIT_GIT_PATH";

/// Environment variable overriding the SSH command used by `clone`
pub const SSH_COMMAND_ENV: &str = "SSH_COMMAND";

/// Git executable configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable
    pub path: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            path: "git".to_string(),
        }
    }
}

/// Settings for the `clone` command
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CloneConfig {
    /// SSH command used verbatim instead of the built-in default
    pub ssh_command: Option<String>,
}

/// Defaults for the `configure` command
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigureConfig {
    /// Value for `user.email`
    pub email: String,

    /// Value for `core.sshCommand`
    pub ssh_command: String,

    /// Value for `pull.rebase`
    pub pull_rebase: String,

    /// Signing key literal or path to a public key file
    pub signing_key: String,
}

impl Default for ConfigureConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            ssh_command: DEFAULT_CONFIGURE_SSH_COMMAND.to_string(),
            pull_rebase: DEFAULT_PULL_REBASE.to_string(),
            signing_key: String::new(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Git executable configuration
    pub git: GitConfig,

    /// Clone settings
    pub clone: CloneConfig,

    /// Configure defaults
    pub configure: ConfigureConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/awesome-git/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("awesome-git").join("config.toml"))
    }

    /// Apply environment variable overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment variable overrides using the given lookup
    ///
    /// Supported variables:
    /// - AWESOME_GIT_GIT_PATH: Path to the git executable
    /// - SSH_COMMAND: SSH command for `clone` (empty means unset)
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(GIT_PATH_ENV).filter(|p| !p.is_empty()) {
            self.git.path = path;
        }

        if let Some(command) = lookup(SSH_COMMAND_ENV).filter(|c| !c.is_empty()) {
            self.clone.ssh_command = Some(command);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, git_path: Option<String>) -> Self {
        if let Some(path) = git_path {
            self.git.path = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(git_path: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(git_path))
    }
}
