//! Daydash entry point
//!
//! Parses the command line, loads configuration, sets up file logging,
//! and starts the dashboard.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daydash::{config, ui, Config};

#[derive(Parser)]
#[command(name = "daydash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal dashboard for the terminal")]
#[command(
    long_about = "Daydash shows weather, quotes, your to-do list, and a live clock\nin one terminal screen, with everything persisted locally."
)]
struct Cli {
    /// Path to a config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = cli.command {
        let content = config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(&path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir.to_string_lossy().to_string();
    }

    init_logging(&config)?;

    tracing::info!("Daydash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.store.data_dir);

    ui::run(config).await
}

/// The terminal is in raw mode while the dashboard runs, so logs go to a
/// file instead of stdout
fn init_logging(config: &Config) -> Result<()> {
    let path = match &config.logging.file {
        Some(file) => PathBuf::from(file),
        None => Path::new(&config.store.data_dir).join("daydash.log"),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let writer = Arc::new(file);

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("daydash={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
    }
    Ok(())
}
