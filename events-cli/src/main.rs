//! # vet-events
//!
//! CLI tool for exercising the Veterinaria system-event controller against
//! an in-process host.
//!
//! ## Commands
//!
//! - `dispatch`: Deliver one event and print the resulting host state
//! - `replay`: Deliver every event in a JSON-lines file, in order
//! - `channel`: Show the notification channel and platform profile
//!
//! ## Example
//!
//! ```bash
//! # Appointment reminder
//! vet-events dispatch com.example.veterinaria.RECORDATORIO_CITA \
//!     --extra NOMBRE_MASCOTA=Firulais --extra HORA_CITA=15:00
//!
//! # Connectivity change while offline on an old host
//! vet-events --api-level 21 --offline dispatch android.net.conn.CONNECTIVITY_CHANGE
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod config;

use commands::{channel, dispatch, replay};
use config::Config;

/// CLI tool for exercising the Veterinaria system-event controller.
#[derive(Parser, Debug)]
#[command(name = "vet-events")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: events.toml in the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated platform API level
    #[arg(long, global = true)]
    api_level: Option<u32>,

    /// Simulate a host with no active network
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Deliver one event
    Dispatch {
        /// Event action tag
        action: String,

        /// Event extra as KEY=VALUE (repeatable)
        #[arg(long = "extra", value_name = "KEY=VALUE")]
        extras: Vec<String>,
    },

    /// Deliver every event in a JSON-lines file
    Replay {
        /// File with one {"action": ..., "extras": {...}} object per line
        file: PathBuf,
    },

    /// Show the notification channel and platform profile
    Channel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_file_or_default(&default_config_path()?)?,
    };
    if let Some(level) = cli.api_level {
        config.host.api_level = level;
    }
    if cli.offline {
        config.connectivity.online = false;
    }

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dispatch { action, extras } => {
            dispatch::run(&config, &action, &extras).await?;
        }
        Commands::Replay { file } => {
            replay::run(&config, &file).await?;
        }
        Commands::Channel => {
            channel::run(&config)?;
        }
    }

    Ok(())
}

/// Get the default configuration file path for vet-events.
fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "example", "vet-events")
        .context("Could not determine home directory")?;
    Ok(dirs.config_dir().join("events.toml"))
}
