//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, store access and the output helpers
//! used by more than one command.

use crate::app::models::{DoorStatus, LocationEntry};
use crate::app::services::location_store::JsonFileStore;
use crate::cli::args::Args;
use crate::config::AppConfig;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set; otherwise the level comes from `-v`/`-q`.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("localtrack={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configuration file named on the command line, or the default one
///
/// A `--data-dir` flag overrides the configured data directory.
pub fn load_config(args: &Args) -> Result<AppConfig> {
    args.validate()?;

    let config = match &args.config_file {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };

    Ok(match &args.data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

/// Open the JSON store in the configured data directory
pub fn open_store(config: &AppConfig) -> JsonFileStore {
    let store = JsonFileStore::open(&config.resolve_data_dir());
    debug!("Using location store at {}", store.path().display());
    store
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to encode command output", e))?;
    println!("{}", json);
    Ok(())
}

/// Colored door status label
pub fn status_label(status: DoorStatus) -> ColoredString {
    match status {
        DoorStatus::Ok => status.label().bright_green().bold(),
        DoorStatus::NotYet => status.label().yellow(),
    }
}

/// One-line listing row
pub fn format_entry_row(entry: &LocationEntry) -> String {
    format!(
        "{}  {}  {}  [{}]",
        entry.id.dimmed(),
        entry.name.bright_white().bold(),
        entry.gps,
        status_label(entry.door_status)
    )
}

/// Multi-line detail view
pub fn format_entry_details(entry: &LocationEntry) -> String {
    format!(
        "{}\n  ID:       {}\n  GPS:      {}\n  Status:   {}\n  Created:  {}\n  Updated:  {}\n  Navigate: {}",
        entry.name.bright_white().bold(),
        entry.id,
        entry.gps,
        status_label(entry.door_status),
        entry.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        entry.navigation_url()
    )
}
