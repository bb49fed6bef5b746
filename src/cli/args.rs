//! Command-line argument definitions for liftwatch
//!
//! Defines the CLI interface using the clap derive API: a `serve` command
//! that runs the dashboard server and a `snapshot` command that runs one
//! refresh cycle and prints the result.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the liftwatch dashboard
///
/// Merges a spreadsheet-backed lift status log with NOAA hourly wind
/// forecasts and serves the result as an auto-refreshing dashboard.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "liftwatch",
    version,
    about = "Lift status and wind forecast dashboard",
    long_about = "Polls a spreadsheet-backed operational log of lift status entries and NOAA \
                  hourly wind forecasts, filters today's unresolved entries into categorized \
                  views, and renders them as an auto-refreshing web page."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the dashboard web server
    Serve(ServeArgs),
    /// Run one refresh cycle and print the result
    Snapshot(SnapshotArgs),
}

/// Arguments shared by both commands for source and config resolution
#[derive(Debug, Clone, Parser)]
pub struct SourceArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// $LIFTWATCH_CONFIG and then ~/.config/liftwatch/config.toml.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Published CSV export URL of the lift status sheet
    ///
    /// Overrides the config file and the LIFTWATCH_SHEET_URL environment
    /// variable.
    #[arg(
        long = "sheet-url",
        value_name = "URL",
        help = "CSV export URL of the lift status sheet"
    )]
    pub sheet_url: Option<String>,

    /// Local CSV file to use as the lift status sheet
    ///
    /// Useful for development; takes precedence over any URL.
    #[arg(
        long = "sheet-csv",
        value_name = "FILE",
        help = "Local CSV file to use as the lift status sheet"
    )]
    pub sheet_csv: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl SourceArgs {
    /// Validate source resolution arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(sheet_csv) = &self.sheet_csv {
            if !sheet_csv.exists() {
                return Err(Error::configuration(format!(
                    "Sheet CSV file does not exist: {}",
                    sheet_csv.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level from the verbosity flags
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

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Bind address for the dashboard server
    #[arg(
        short = 'b',
        long = "bind",
        value_name = "ADDR",
        help = "Bind address (e.g. 0.0.0.0:3000)"
    )]
    pub bind_addr: Option<String>,

    /// Seconds between automatic page refreshes
    #[arg(
        long = "refresh",
        value_name = "SECS",
        help = "Seconds between automatic page refreshes"
    )]
    pub refresh_secs: Option<u64>,
}

impl ServeArgs {
    /// Validate the serve command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;

        if let Some(addr) = &self.bind_addr {
            if addr.parse::<std::net::SocketAddr>().is_err() {
                return Err(Error::configuration(format!(
                    "Invalid bind address: {addr}"
                )));
            }
        }

        if self.refresh_secs == Some(0) {
            return Err(Error::configuration(
                "Refresh interval must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

/// Arguments for the snapshot command
#[derive(Debug, Clone, Parser)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the snapshot
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the snapshot"
    )]
    pub output_format: OutputFormat,
}

impl SnapshotArgs {
    /// Validate the snapshot command arguments
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
