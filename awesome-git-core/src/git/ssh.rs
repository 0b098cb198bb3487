//! SSH command strings and global `core.sshCommand` validation

use std::path::Path;

use crate::{Error, Result};

/// SSH command used by `clone` when no override is given
pub const DEFAULT_CLONE_SSH_COMMAND: &str = "ssh -o IdentitiesOnly=yes -i ./key.pub";

/// SSH command written by `configure` when no value is given
///
/// The key path is relative to the repository root, one level below the
/// directory `clone` ran in.
pub const DEFAULT_CONFIGURE_SSH_COMMAND: &str = "ssh -o IdentitiesOnly=yes -i ../key.pub";

/// Environment variable git reads its SSH command from
pub const GIT_SSH_COMMAND_ENV: &str = "GIT_SSH_COMMAND";

/// Replace the first `ssh` token in `command` with `executable`
pub fn inject_ssh_executable(command: &str, executable: &str) -> String {
    command.replacen("ssh", executable, 1)
}

/// Validate a raw global `core.sshCommand` value as a bare executable path
///
/// Values with arguments cannot be spliced into another command line and are
/// rejected, as are paths that don't exist. Returns the trimmed path.
pub fn validate_ssh_executable(raw: &str) -> Result<String> {
    let command = raw.trim();

    if command.contains(char::is_whitespace) {
        return Err(Error::GlobalSshCommand(
            "global core.sshCommand contains additional parameters".to_string(),
        ));
    }

    if !Path::new(command).exists() {
        return Err(Error::GlobalSshCommand(format!(
            "executable file does not exist: {}",
            command
        )));
    }

    Ok(command.to_string())
}
