//! Lock and unlock commands.

use crate::cloud::{VehicleCloud, VehicleCommand};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// `tesla lock` / `tesla unlock`.
pub struct LockCommand {
    config: Config,
    lock: bool,
}

impl LockCommand {
    pub fn lock(config: &Config) -> Self {
        Self {
            config: config.clone(),
            lock: true,
        }
    }

    pub fn unlock(config: &Config) -> Self {
        Self {
            config: config.clone(),
            lock: false,
        }
    }
}

impl Command for LockCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;
        session::ensure_online(cloud, ui, &mut vehicle)?;

        if self.lock {
            cloud.command(&vehicle, &VehicleCommand::Lock)?;
            ui.message("🔒 Vehicle locked");
        } else {
            cloud.command(&vehicle, &VehicleCommand::Unlock)?;
            ui.message("🔓 Vehicle unlocked");
        }

        Ok(CommandResult::success())
    }
}
