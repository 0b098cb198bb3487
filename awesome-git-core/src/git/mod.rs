//! Git operations for awesome-git
//!
//! This module wraps the `git` executable and holds the SSH command and
//! signing key helpers used by the clone and configure operations.

mod cli;
mod env;
mod signing;
mod ssh;

pub use cli::{GitCli, GitOps};
pub use env::ScopedEnvVar;
pub use signing::{is_valid_signing_key, resolve_signing_key, SIGNING_KEY_PREFIXES};
pub use ssh::{
    inject_ssh_executable, validate_ssh_executable, DEFAULT_CLONE_SSH_COMMAND,
    DEFAULT_CONFIGURE_SSH_COMMAND, GIT_SSH_COMMAND_ENV,
};
