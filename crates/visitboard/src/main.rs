//! Visitboard CLI - visit counters for static documentation sites.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "visitboard")]
#[command(about = "Visit counters for static documentation sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to visitboard.toml config file
    #[arg(short, long, default_value = "visitboard.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Fetch a single visit summary
    Fetch {
        /// First day of the window (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Run as part of a static site build
        #[arg(long)]
        build: bool,
    },

    /// Fetch the cumulative and current counters
    Board {
        /// Start of the cumulative counter (defaults to config)
        #[arg(short, long)]
        since: Option<NaiveDate>,

        /// Run as part of a static site build
        #[arg(long)]
        build: bool,
    },

    /// Write the counters to a JSON file for the site build
    Snapshot {
        /// Output file
        #[arg(short, long, default_value = "docs/public/visits.json")]
        output: PathBuf,

        /// Start of the cumulative counter (defaults to config)
        #[arg(short, long)]
        since: Option<NaiveDate>,

        /// Run as part of a static site build
        #[arg(long)]
        build: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Fetch { start, build } => {
            commands::fetch::run(&cli.config, start, build).await?;
        }
        Commands::Board { since, build } => {
            commands::board::run(&cli.config, since, build).await?;
        }
        Commands::Snapshot {
            output,
            since,
            build,
        } => {
            commands::snapshot::run(&cli.config, &output, since, build).await?;
        }
    }

    Ok(())
}
