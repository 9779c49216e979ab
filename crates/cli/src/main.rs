//! Roamer CLI: the main entry point.
//!
//! Commands:
//! - `query` - Ask questions interactively, or one with `--message`
//! - `locations` - List the locations the data covers
//! - `config` - Show the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "roamer",
    about = "Roamer: ask about taxes, attractions and travel costs by location",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (default: ~/.roamer/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory the configured CSV sources are relative to
    #[arg(short, long, global = true, env = "ROAMER_DATA_DIR")]
    data_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask about locations
    Query {
        /// Answer a single question instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List known locations
    Locations,

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing. Source and augmentation problems are already
    // printed for the user, so logs stay quiet unless asked for.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = roamer_config::AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let result = match cli.command {
        Commands::Query { message } => commands::query::run(&config, message).await,
        Commands::Locations => commands::locations::run(&config),
        Commands::Config => commands::config_cmd::show(&config, cli.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
