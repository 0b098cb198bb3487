//! Clone a repository with a custom SSH command

use std::path::Path;

use crate::git::{
    inject_ssh_executable, GitOps, ScopedEnvVar, DEFAULT_CLONE_SSH_COMMAND, GIT_SSH_COMMAND_ENV,
};
use crate::{Error, Result};

/// Public key file that must exist in the clone directory
pub const KEY_FILE_NAME: &str = "key.pub";

/// Where the SSH command used for a clone came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshCommandSource {
    /// SSH_COMMAND environment variable or config file
    Override,
    /// Built-in default with the global SSH executable injected
    GlobalExecutable,
    /// Built-in default as is
    BuiltIn,
}

/// Outcome of a successful clone
#[derive(Debug, Clone)]
pub struct CloneReport {
    /// Repository URL that was cloned
    pub url: String,
    /// SSH command git was run with
    pub ssh_command: String,
    /// Where `ssh_command` came from
    pub source: SshCommandSource,
}

/// Pick the SSH command for a clone
///
/// An override is used verbatim. Otherwise the built-in default is used,
/// with its `ssh` token replaced by the global SSH executable when one can
/// be resolved.
pub fn resolve_clone_ssh_command(
    git: &impl GitOps,
    ssh_override: Option<&str>,
) -> (String, SshCommandSource) {
    if let Some(command) = ssh_override.filter(|c| !c.is_empty()) {
        return (command.to_string(), SshCommandSource::Override);
    }

    match git.resolve_global_ssh_executable() {
        Ok(executable) => {
            let command = inject_ssh_executable(DEFAULT_CLONE_SSH_COMMAND, &executable);
            tracing::info!(ssh_command = %command, "Injecting global SSH command");
            (command, SshCommandSource::GlobalExecutable)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to retrieve global SSH command; using built-in SSH command (override with SSH_COMMAND)"
            );
            (
                DEFAULT_CLONE_SSH_COMMAND.to_string(),
                SshCommandSource::BuiltIn,
            )
        }
    }
}

/// Clone `url` from `workdir`, which must contain [`KEY_FILE_NAME`]
///
/// `GIT_SSH_COMMAND` is set for the duration of the clone and removed
/// afterwards whether or not the clone succeeded.
pub fn clone(
    git: &impl GitOps,
    workdir: &Path,
    url: &str,
    ssh_override: Option<&str>,
) -> Result<CloneReport> {
    let key_file = workdir.join(KEY_FILE_NAME);
    if !key_file.exists() {
        return Err(Error::MissingKeyFile(key_file));
    }

    let (ssh_command, source) = resolve_clone_ssh_command(git, ssh_override);

    {
        let _ssh_env = ScopedEnvVar::set(GIT_SSH_COMMAND_ENV, &ssh_command);
        tracing::info!(url, "Cloning repository");
        git.clone_repo(url)?;
    }

    Ok(CloneReport {
        url: url.to_string(),
        ssh_command,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::FakeGit;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // GIT_SSH_COMMAND is process-global
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const URL: &str = "git@example.com:team/project.git";

    fn dir_with_key() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(KEY_FILE_NAME), "ssh-ed25519 AAAA test\n").unwrap();
        dir
    }

    #[test]
    fn test_missing_key_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let git = FakeGit::default();

        let result = clone(&git, dir.path(), URL, None);
        assert!(matches!(result, Err(Error::MissingKeyFile(_))));
        assert!(git.clones.borrow().is_empty());
        assert_eq!(git.global_lookups.get(), 0);
    }

    #[test]
    fn test_override_used_verbatim() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit {
            global_ssh: Some("/usr/bin/ssh2".to_string()),
            ..FakeGit::default()
        };

        let report = clone(&git, dir.path(), URL, Some("ssh -i /keys/deploy")).unwrap();
        assert_eq!(report.ssh_command, "ssh -i /keys/deploy");
        assert_eq!(report.source, SshCommandSource::Override);
        assert_eq!(git.global_lookups.get(), 0);

        let clones = git.clones.borrow();
        assert_eq!(clones.len(), 1);
        assert_eq!(clones[0].0, URL);
        assert_eq!(clones[0].1.as_deref(), Some("ssh -i /keys/deploy"));
    }

    #[test]
    fn test_global_executable_injected() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit {
            global_ssh: Some("/usr/bin/ssh2".to_string()),
            ..FakeGit::default()
        };

        let report = clone(&git, dir.path(), URL, None).unwrap();
        assert_eq!(
            report.ssh_command,
            "/usr/bin/ssh2 -o IdentitiesOnly=yes -i ./key.pub"
        );
        assert_eq!(report.source, SshCommandSource::GlobalExecutable);
        assert_eq!(
            git.clones.borrow()[0].1.as_deref(),
            Some("/usr/bin/ssh2 -o IdentitiesOnly=yes -i ./key.pub")
        );
    }

    #[test]
    fn test_lookup_failure_keeps_default() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit::default();

        let report = clone(&git, dir.path(), URL, None).unwrap();
        assert_eq!(report.ssh_command, DEFAULT_CLONE_SSH_COMMAND);
        assert_eq!(report.source, SshCommandSource::BuiltIn);
        assert_eq!(git.global_lookups.get(), 1);
    }

    #[test]
    fn test_empty_override_ignored() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit::default();

        let report = clone(&git, dir.path(), URL, Some("")).unwrap();
        assert_eq!(report.source, SshCommandSource::BuiltIn);
        assert_eq!(git.global_lookups.get(), 1);
    }

    #[test]
    fn test_env_cleared_after_success() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit::default();

        clone(&git, dir.path(), URL, None).unwrap();
        assert!(std::env::var(GIT_SSH_COMMAND_ENV).is_err());
    }

    #[test]
    fn test_env_cleared_after_failure() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = dir_with_key();
        let git = FakeGit {
            fail_clone: true,
            ..FakeGit::default()
        };

        let result = clone(&git, dir.path(), URL, Some("ssh -v"));
        assert!(matches!(result, Err(Error::Git(_))));
        assert_eq!(git.clones.borrow()[0].1.as_deref(), Some("ssh -v"));
        assert!(std::env::var(GIT_SSH_COMMAND_ENV).is_err());
    }
}
