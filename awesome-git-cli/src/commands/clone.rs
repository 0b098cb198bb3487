//! Clone command - Clone a repository using custom SSH options

use awesome_git_core::{ops, Config, GitCli, SshCommandSource};
use clap::Args;

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Repository URL to clone
    #[arg(required = true)]
    pub url: String,
}

impl CloneArgs {
    /// Execute the clone command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let workdir = std::env::current_dir()?;
        let git = GitCli::new().with_git_path(&config.git.path);

        if verbose {
            tracing::info!(
                url = %self.url,
                workdir = %workdir.display(),
                ssh_override = config.clone.ssh_command.is_some(),
                "Starting clone"
            );
        }

        println!("Cloning repository: {}", self.url);

        let ssh_override = config.clone.ssh_command.as_deref();
        let report = ops::clone(&git, &workdir, &self.url, ssh_override)?;

        match report.source {
            SshCommandSource::Override => {
                println!("Using SSH command from SSH_COMMAND: {}", report.ssh_command)
            }
            SshCommandSource::GlobalExecutable => {
                println!("Injected global SSH command: {}", report.ssh_command)
            }
            SshCommandSource::BuiltIn => println!(
                "Used built-in SSH command: {} (override using SSH_COMMAND environment variable)",
                report.ssh_command
            ),
        }

        println!("Repository cloned successfully.");

        Ok(())
    }
}
