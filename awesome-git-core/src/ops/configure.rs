//! Write local repository settings

use crate::config::ConfigureConfig;
use crate::git::{
    inject_ssh_executable, resolve_signing_key, GitOps, DEFAULT_CONFIGURE_SSH_COMMAND,
};
use crate::{Error, Result};

/// Values for the configure operation
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// Value for `user.email`
    pub email: String,
    /// Value for `core.sshCommand`
    pub ssh_command: String,
    /// Value for `pull.rebase`, passed to git as is
    pub pull_rebase: String,
    /// Signing key literal or path to a public key file
    pub signing_key: String,
    /// Skip writing `core.sshCommand`
    pub disable_ssh: bool,
    /// Skip writing `user.signingkey`
    pub disable_signing_key: bool,
}

impl From<ConfigureConfig> for ConfigureOptions {
    fn from(config: ConfigureConfig) -> Self {
        Self {
            email: config.email,
            ssh_command: config.ssh_command,
            pull_rebase: config.pull_rebase,
            signing_key: config.signing_key,
            disable_ssh: false,
            disable_signing_key: false,
        }
    }
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        ConfigureConfig::default().into()
    }
}

/// Values written by a successful configure
///
/// Disabled settings are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureReport {
    pub email: String,
    pub ssh_command: Option<String>,
    pub pull_rebase: String,
    pub signing_key: Option<String>,
}

/// Write the local repository settings described by `options`
///
/// Fails before writing anything when not inside a work tree. A failed write
/// aborts the operation; settings written before it are kept.
pub fn configure(git: &impl GitOps, options: &ConfigureOptions) -> Result<ConfigureReport> {
    if !git.is_inside_repo() {
        return Err(Error::NotInRepository);
    }

    git.set_local_config("user.email", &options.email)?;
    tracing::debug!(email = %options.email, "Set user email");

    let ssh_command = if options.disable_ssh {
        tracing::debug!("SSH command configuration disabled");
        None
    } else {
        Some(configure_ssh_command(git, &options.ssh_command)?)
    };

    git.set_local_config("pull.rebase", &options.pull_rebase)?;
    tracing::debug!(pull_rebase = %options.pull_rebase, "Set pull rebase");

    let signing_key = if options.disable_signing_key {
        tracing::debug!("Signing key configuration disabled");
        None
    } else {
        let key = resolve_signing_key(&options.signing_key)?;
        git.set_local_config("user.signingkey", &key)?;
        Some(key)
    };

    Ok(ConfigureReport {
        email: options.email.clone(),
        ssh_command,
        pull_rebase: options.pull_rebase.clone(),
        signing_key,
    })
}

fn configure_ssh_command(git: &impl GitOps, ssh_command: &str) -> Result<String> {
    git.set_local_config("core.sshCommand", ssh_command)?;

    if ssh_command != DEFAULT_CONFIGURE_SSH_COMMAND {
        return Ok(ssh_command.to_string());
    }

    match git.resolve_global_ssh_executable() {
        Ok(executable) => {
            let injected = inject_ssh_executable(ssh_command, &executable);
            tracing::info!(ssh_command = %injected, "Injecting global SSH command");
            git.set_local_config("core.sshCommand", &injected)?;
            Ok(injected)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to retrieve global SSH command; using default SSH command");
            Ok(ssh_command.to_string())
        }
    }
}
