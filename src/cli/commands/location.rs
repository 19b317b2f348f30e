//! Location command implementation.

use crate::cloud::VehicleCloud;
use crate::config::Config;
use crate::error::{Result, TeslaError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// `tesla location`: coordinates plus a map link.
pub struct LocationCommand {
    config: Config,
}

impl LocationCommand {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Command for LocationCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;

        // Quiet wake: only the spinner shows while waiting.
        if !vehicle.is_online() {
            session::ensure_online(cloud, ui, &mut vehicle)?;
        }

        let data = cloud.vehicle_data(&vehicle)?;
        let (lat, lon) = match (data.drive_state.latitude, data.drive_state.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(TeslaError::LocationUnavailable),
        };

        ui.message(&format!("📍 Location: {}, {}", lat, lon));
        ui.message(&maps_link(lat, lon));

        Ok(CommandResult::success())
    }
}

fn maps_link(lat: f64, lon: f64) -> String {
    format!("   https://www.google.com/maps?q={},{}", lat, lon)
}
