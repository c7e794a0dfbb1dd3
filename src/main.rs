//! CLI entry point for sitegen

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(version = "0.1.0")]
#[command(about = "A minimal static site builder", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site into the public folder
    #[command(alias = "b")]
    Build,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sitegen=debug,info"
    } else {
        "sitegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Build => {
            let site = sitegen::Site::new(&base_dir)?;
            tracing::info!("Building site...");
            site.build().await.context("build failed")?;
            println!("Build completed successfully!");
        }

        Commands::Clean => {
            let site = sitegen::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("sitegen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
