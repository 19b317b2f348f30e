//! Honk and flash commands.

use crate::cloud::{VehicleCloud, VehicleCommand};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// `tesla honk` / `tesla flash`.
pub struct AlertCommand {
    config: Config,
    command: VehicleCommand,
}

impl AlertCommand {
    pub fn honk(config: &Config) -> Self {
        Self {
            config: config.clone(),
            command: VehicleCommand::HonkHorn,
        }
    }

    pub fn flash(config: &Config) -> Self {
        Self {
            config: config.clone(),
            command: VehicleCommand::FlashLights,
        }
    }

    fn confirmation(&self) -> &'static str {
        match self.command {
            VehicleCommand::HonkHorn => "📢 Honked!",
            _ => "💡 Flashed lights!",
        }
    }
}

impl Command for AlertCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;
        session::ensure_online(cloud, ui, &mut vehicle)?;

        cloud.command(&vehicle, &self.command)?;
        ui.message(self.confirmation());

        Ok(CommandResult::success())
    }
}
