//! Command-line interface for draftsight
//!
//! Supports the graphical draft screen (default), headless drafts and a
//! champion statistics listing.

use clap::Parser;
use std::path::PathBuf;

/// Champion draft builder with win-probability lookup
#[derive(Parser, Debug)]
#[command(name = "draftsight")]
#[command(about = "Champion draft builder with win-probability lookup")]
#[command(version)]
pub struct Args {
    /// Run a headless draft with the specified JSON config file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub headless: Option<PathBuf>,

    /// Output path for the draft report (headless mode only)
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Prediction API base URL, overriding the settings file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Accept partial rosters (1-5 picks per team)
    #[arg(long)]
    pub lenient: bool,

    /// Print aggregate champion statistics and exit
    #[arg(long, conflicts_with = "headless")]
    pub stats: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
