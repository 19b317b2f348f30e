//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::cloud::VehicleCloud;
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `cloud` - Vehicle cloud client
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: Config,
}

impl CommandDispatcher {
    /// Create a new dispatcher with start-up configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(
        &self,
        cli: &Cli,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!(command = ?cli.command, "dispatching");
        let config = &self.config;

        match &cli.command {
            Commands::Auth => super::auth::AuthCommand::new(config).execute(cloud, ui),
            Commands::Status => {
                super::status::StatusCommand::new(config, cli.json).execute(cloud, ui)
            }
            Commands::Lock => super::lock::LockCommand::lock(config).execute(cloud, ui),
            Commands::Unlock => super::lock::LockCommand::unlock(config).execute(cloud, ui),
            Commands::Climate(args) => {
                super::climate::ClimateCommand::new(config, args.clone()).execute(cloud, ui)
            }
            Commands::Charge(args) => {
                super::charge::ChargeCommand::new(config, args.clone()).execute(cloud, ui)
            }
            Commands::Location => {
                super::location::LocationCommand::new(config).execute(cloud, ui)
            }
            Commands::Honk => super::alert::AlertCommand::honk(config).execute(cloud, ui),
            Commands::Flash => super::alert::AlertCommand::flash(config).execute(cloud, ui),
            Commands::Wake => super::wake::WakeCommand::new(config).execute(cloud, ui),
        }
    }
}
