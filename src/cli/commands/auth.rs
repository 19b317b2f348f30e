//! Auth command implementation.
//!
//! The `tesla auth` command signs in (or confirms the cached token) and
//! reports which vehicle will be controlled.

use crate::cloud::VehicleCloud;
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// The auth command implementation.
pub struct AuthCommand {
    config: Config,
}

impl AuthCommand {
    /// Create a new auth command.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Command for AuthCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let vehicle = session::connect(&self.config, cloud, ui)?;

        ui.message("");
        ui.message(&format!("🚗 Found: {} ({})", vehicle.name(), vehicle.vin));
        ui.message(&format!(
            "✅ Authentication cached at {}",
            self.config.cache_file.display()
        ));

        Ok(CommandResult::success())
    }
}
