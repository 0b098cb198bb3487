//! awesome-git CLI - Clone and configure git repositories
//!
//! Clones with a custom SSH command and writes local repository settings.

mod commands;

use awesome_git_core::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CloneArgs, ConfigureArgs};

/// Awesome Git is a CLI tool for managing Git repositories
#[derive(Parser, Debug)]
#[command(name = "awesome-git")]
#[command(author, version, about)]
#[command(long_about = "A CLI tool to clone and configure Git repositories with custom settings.")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to git executable (overrides config and env)
    #[arg(long, global = true, env = "AWESOME_GIT_GIT_PATH")]
    git_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a Git repository using custom SSH options
    Clone(CloneArgs),

    /// Configure local Git repository settings
    Configure(ConfigureArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.git_path.clone())?;

    if cli.verbose {
        tracing::info!(
            git_path = %config.git.path,
            ssh_override = ?config.clone.ssh_command,
            "Configuration loaded"
        );
    }

    match cli.command {
        Commands::Clone(args) => args.execute(cli.verbose, &config)?,
        Commands::Configure(args) => args.execute(cli.verbose, &config)?,
        Commands::Config => {
            println!("awesome-git Configuration");
            println!("=========================");
            println!();
            println!("Git:");
            println!("  path: {}", config.git.path);
            println!();
            println!("Clone:");
            println!(
                "  ssh_command: {}",
                config.clone.ssh_command.as_deref().unwrap_or("(built-in default)")
            );
            println!();
            println!("Configure defaults:");
            println!("  email: {}", config.configure.email);
            println!("  ssh_command: {}", config.configure.ssh_command);
            println!("  pull_rebase: {}", config.configure.pull_rebase);
            println!(
                "  signing_key: {}",
                if config.configure.signing_key.is_empty() {
                    "(none)"
                } else {
                    config.configure.signing_key.as_str()
                }
            );
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
    }

    Ok(())
}
