//! Command-line argument definitions for LocalTrack
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::DoorStatus;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the LocalTrack location tracker
///
/// Records physical locations with GPS coordinates and a door status, and
/// imports them in bulk from pasted CSV exports, map links or coordinate
/// lists.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "localtrack",
    version,
    about = "Track locations and their door status, with bulk import from pasted text",
    long_about = "Keeps a local list of locations (name, GPS coordinates, door status). \
                  Locations can be added by hand, from a Google Maps share link, or imported \
                  in bulk from CSV exports with WKT POINT geometry, map links and plain \
                  'lat, lon' pairs."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/localtrack/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory holding the location store document
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        global = true,
        help = "Directory holding the location store"
    )]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import locations from pasted text (file or stdin)
    Import(ImportArgs),
    /// List stored locations, newest first
    List(ListArgs),
    /// Show one location
    Show(ShowArgs),
    /// Add a location by hand or from a map link
    Add(AddArgs),
    /// Edit an existing location
    Edit(EditArgs),
    /// Flip a location's door status
    Toggle(IdArgs),
    /// Set a location's door status
    SetStatus(SetStatusArgs),
    /// Delete a location
    Delete(IdArgs),
    /// Show door status statistics
    Stats(StatsArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// File with the pasted text; reads stdin when omitted
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "File to import (defaults to stdin)"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the import summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Case-insensitive name search, or a substring of the coordinates
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show locations with this door status (ok, not-yet)
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<DoorStatus>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the listing"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Location id
    pub id: String,

    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the add command
#[derive(Debug, Clone, Parser)]
pub struct AddArgs {
    /// Location name; taken from the map link when omitted
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Coordinates as "lat, lon"
    #[arg(
        short = 'g',
        long = "gps",
        value_name = "LAT,LON",
        conflicts_with = "from_link",
        required_unless_present = "from_link"
    )]
    pub gps: Option<String>,

    /// Google Maps share link carrying "@lat,lon"
    #[arg(long = "from-link", value_name = "URL")]
    pub from_link: Option<String>,

    /// Initial door status (ok, not-yet)
    #[arg(long = "status", value_name = "STATUS", default_value = "not-yet")]
    pub status: DoorStatus,
}

/// Arguments for the edit command
#[derive(Debug, Clone, Parser)]
pub struct EditArgs {
    /// Location id
    pub id: String,

    /// New name
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// New coordinates as "lat, lon"
    #[arg(short = 'g', long = "gps", value_name = "LAT,LON")]
    pub gps: Option<String>,

    /// New door status (ok, not-yet)
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<DoorStatus>,
}

/// Arguments for commands addressing a single location
#[derive(Debug, Clone, Parser)]
pub struct IdArgs {
    /// Location id
    pub id: String,
}

/// Arguments for the set-status command
#[derive(Debug, Clone, Parser)]
pub struct SetStatusArgs {
    /// Location id
    pub id: String,

    /// Door status (ok, not-yet)
    pub status: DoorStatus,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate global arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(data_dir) = &self.data_dir {
            if data_dir.exists() && !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data path is not a directory: {}",
                    data_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl EditArgs {
    /// At least one field must change
    pub fn validate(&self) -> Result<()> {
        if self.name.is_none() && self.gps.is_none() && self.status.is_none() {
            return Err(Error::configuration(
                "Nothing to edit: pass --name, --gps or --status",
            ));
        }
        Ok(())
    }
}
