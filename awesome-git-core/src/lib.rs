//! awesome-git core - clone and configure git repositories with custom SSH settings
//!
//! This crate wraps the `git` executable: cloning with a scoped
//! `GIT_SSH_COMMAND`, and writing local email, SSH command, pull strategy
//! and signing key settings.

pub mod config;
pub mod error;
pub mod git;
pub mod ops;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{GitCli, GitOps};
pub use ops::{CloneReport, ConfigureOptions, ConfigureReport, SshCommandSource};
