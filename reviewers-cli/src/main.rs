//! Request Reviewers CLI
//!
//! Requests a configured set of users as reviewers on the pull request that
//! triggered the current workflow run.

mod actions;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use reviewers_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::RequestArgs;

/// Request pull request reviewers from CI
#[derive(Parser, Debug)]
#[command(name = "request-reviewers")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (defaults to ~/.config/request-reviewers/config.toml)
    #[arg(long, global = true, env = "REQUEST_REVIEWERS_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    request: RequestArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries workflow commands
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("request-reviewers {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config) => {
            let config = Config::load_with_overrides(cli.config.as_deref(), None, None)?;

            println!("Request Reviewers Configuration");
            println!("===============================");
            println!();
            println!("Reviewer Settings:");
            println!(
                "  users: {}",
                config.reviewers.users.as_deref().unwrap_or("(none)")
            );
            println!(
                "  ignore_drafts: {}",
                config.reviewers.ignore_drafts.unwrap_or(false)
            );
            println!();
            let path = cli.config.or_else(Config::default_config_path);
            if let Some(path) = path {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        None => cli.request.execute(cli.config.as_deref()).await,
    }
}
