//! gambrew - Homebrew formula generator for GAM

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "gambrew")]
#[command(author, version, about = "Renders the Homebrew formula for the latest GAM release")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the formula from the latest published GAM release
    Generate {
        /// Output path for the rendered formula
        #[arg(long, default_value = gambrew::DEFAULT_FORMULA_PATH)]
        output: PathBuf,
        /// GitHub API base URL
        #[arg(long, env = "GAMBREW_API_URL", default_value = gambrew::DEFAULT_API_URL)]
        api_url: String,
        /// Print the formula to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a generated formula file
    Check {
        /// Formula file to check
        #[arg(default_value = gambrew::DEFAULT_FORMULA_PATH)]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            api_url,
            dry_run,
        } => cmd::generate::generate(&api_url, &output, dry_run).await,
        Commands::Check { path } => cmd::check::check(&path),
    }
}
