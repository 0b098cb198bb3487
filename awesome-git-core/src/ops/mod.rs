//! The clone and configure operations
//!
//! Both are generic over [`GitOps`](crate::git::GitOps) and return a report
//! describing what was done; printing and exit codes are left to the caller.

mod clone;
mod configure;

pub use clone::{
    clone, resolve_clone_ssh_command, CloneReport, SshCommandSource, KEY_FILE_NAME,
};
pub use configure::{configure, ConfigureOptions, ConfigureReport};

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use crate::git::{GitOps, GIT_SSH_COMMAND_ENV};
    use crate::{Error, Result};

    /// In-memory [`GitOps`] recording every call
    #[derive(Debug, Default)]
    pub struct FakeGit {
        pub inside_repo: bool,
        pub global_ssh: Option<String>,
        pub fail_clone: bool,
        pub fail_config_key: Option<String>,
        pub writes: RefCell<Vec<(String, String)>>,
        pub clones: RefCell<Vec<(String, Option<String>)>>,
        pub global_lookups: Cell<u32>,
    }

    impl FakeGit {
        pub fn in_repo() -> Self {
            Self {
                inside_repo: true,
                ..Self::default()
            }
        }

        pub fn written(&self, key: &str) -> Vec<String> {
            self.writes
                .borrow()
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .collect()
        }
    }

    impl GitOps for FakeGit {
        fn clone_repo(&self, url: &str) -> Result<()> {
            let ssh = std::env::var(GIT_SSH_COMMAND_ENV).ok();
            self.clones.borrow_mut().push((url.to_string(), ssh));
            if self.fail_clone {
                return Err(Error::Git("error cloning repository: exit status: 128".to_string()));
            }
            Ok(())
        }

        fn set_local_config(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_config_key.as_deref() == Some(key) {
                return Err(Error::Git(format!("could not lock config file for {}", key)));
            }
            self.writes
                .borrow_mut()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }

        fn is_inside_repo(&self) -> bool {
            self.inside_repo
        }

        fn resolve_global_ssh_executable(&self) -> Result<String> {
            self.global_lookups.set(self.global_lookups.get() + 1);
            self.global_ssh.clone().ok_or_else(|| {
                Error::GlobalSshCommand(
                    "error retrieving global core.sshCommand: exit status: 1".to_string(),
                )
            })
        }
    }
}
