//! Error types for awesome-git

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for awesome-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for awesome-git operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The SSH key file required for cloning is missing
    #[error("{} file not found.", .0.display())]
    MissingKeyFile(PathBuf),

    /// The working directory is not inside a git work tree
    #[error("Not in a Git repository. Please run this command from within a Git repository.")]
    NotInRepository,

    /// The git executable failed or could not be started
    #[error("Git error: {0}")]
    Git(String),

    /// The global core.sshCommand could not be used as an executable path
    #[error("{0}")]
    GlobalSshCommand(String),

    /// The signing key does not start with a supported key type
    #[error("Invalid SSH key format. Supported formats are RSA and elliptic curve.")]
    InvalidSigningKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
