//! Launchboard CLI — the main entry point.
//!
//! Commands:
//! - `serve`    — Load the dataset and serve the dashboard (default)
//! - `inspect`  — Print the site options, payload bounds and success counts
//! - `config`   — Show, locate or validate the configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "launchboard",
    about = "Launchboard — interactive launch records dashboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the dataset CSV path
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// Load the dataset and summarize it
    Inspect {
        /// Override the dataset CSV path
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Check the configuration and the dataset it points to
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        None => commands::serve::run(None, None).await?,
        Some(Commands::Serve { port, dataset }) => commands::serve::run(port, dataset).await?,
        Some(Commands::Inspect { dataset }) => commands::inspect::run(dataset).await?,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
