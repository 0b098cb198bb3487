//! Configure command - Write local git repository settings

use awesome_git_core::{ops, Config, ConfigureOptions, GitCli};
use clap::Args;

/// Arguments for the configure command
///
/// Unset values fall back to the `[configure]` table of the config file,
/// then to the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct ConfigureArgs {
    /// Email address for Git commits [default: firstname.lastname@example.com]
    #[arg(short, long)]
    pub email: Option<String>,

    /// Custom SSH command for Git operations [default: ssh -o IdentitiesOnly=yes -i ../key.pub]
    #[arg(short, long)]
    pub ssh_command: Option<String>,

    /// Use rebase when pulling [default: true]
    #[arg(short = 'r', long)]
    pub pull_rebase: Option<String>,

    /// Path to the SSH key file for signing commits or key data content
    #[arg(short = 'k', long)]
    pub signing_key: Option<String>,

    /// Disable SSH command configuration
    #[arg(short = 'd', long)]
    pub disable_ssh: bool,

    /// Disable signing key configuration
    #[arg(short = 'g', long)]
    pub disable_signing_key: bool,
}

impl ConfigureArgs {
    /// Merge the flags over the configured defaults
    pub fn options(&self, config: &Config) -> ConfigureOptions {
        let defaults = &config.configure;
        ConfigureOptions {
            email: self.email.clone().unwrap_or_else(|| defaults.email.clone()),
            ssh_command: self
                .ssh_command
                .clone()
                .unwrap_or_else(|| defaults.ssh_command.clone()),
            pull_rebase: self
                .pull_rebase
                .clone()
                .unwrap_or_else(|| defaults.pull_rebase.clone()),
            signing_key: self
                .signing_key
                .clone()
                .unwrap_or_else(|| defaults.signing_key.clone()),
            disable_ssh: self.disable_ssh,
            disable_signing_key: self.disable_signing_key,
        }
    }

    /// Execute the configure command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let options = self.options(config);
        let git = GitCli::new().with_git_path(&config.git.path);

        if verbose {
            tracing::info!(?options, "Starting configure");
        }

        println!("Configuring local Git repository settings...");

        let report = ops::configure(&git, &options)?;

        println!("+ User email: {}", report.email);
        match report.ssh_command {
            Some(ref command) => println!("+ SSH command: {}", command),
            None => println!("SSH command configuration disabled."),
        }
        println!("+ Pull rebase: {}", report.pull_rebase);
        match report.signing_key {
            Some(ref key) => println!("+ Signing key: {}", key),
            None => println!("Signing key configuration disabled."),
        }

        println!("Local Git repository configuration complete.");

        Ok(())
    }
}
