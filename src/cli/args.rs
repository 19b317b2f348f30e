//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tesla vehicle control.
#[derive(Debug, Parser)]
#[command(name = "tesla")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tesla account email
    #[arg(short, long, global = true, env = "TESLA_EMAIL")]
    pub email: Option<String>,

    /// Output JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Token cache file (defaults to ~/.tesla_cache.json)
    #[arg(long, global = true, env = "TESLA_CACHE_FILE", value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Owner API base URL
    #[arg(long, global = true, hide = true, env = "TESLA_OWNER_API_URL")]
    pub owner_api_url: Option<String>,

    /// SSO base URL
    #[arg(long, global = true, hide = true, env = "TESLA_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Authenticate with Tesla
    Auth,

    /// Get vehicle status
    Status,

    /// Lock the vehicle
    Lock,

    /// Unlock the vehicle
    Unlock,

    /// Climate control
    Climate(ClimateArgs),

    /// Charging control
    Charge(ChargeArgs),

    /// Get vehicle location
    Location,

    /// Honk the horn
    Honk,

    /// Flash the lights
    Flash,

    /// Wake up the vehicle
    Wake,
}

/// Arguments for the `climate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ClimateArgs {
    pub action: ClimateAction,

    /// Temperature value
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Interpret the value as Fahrenheit (always on; see --celsius)
    #[arg(short, long, default_value_t = true)]
    pub fahrenheit: bool,

    /// Interpret the value as Celsius
    #[arg(short, long)]
    pub celsius: bool,
}

impl ClimateArgs {
    /// Whether `value` is in Fahrenheit.
    pub fn is_fahrenheit(&self) -> bool {
        self.fahrenheit && !self.celsius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClimateAction {
    On,
    Off,
    Temp,
}

/// Arguments for the `charge` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChargeArgs {
    pub action: ChargeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChargeAction {
    Status,
    Start,
    Stop,
}
