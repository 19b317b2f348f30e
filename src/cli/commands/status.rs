//! Status command implementation.
//!
//! The `tesla status` command shows battery, climate, lock, and odometer
//! readings, optionally followed by the raw vehicle data as JSON.

use crate::cloud::{Vehicle, VehicleCloud, VehicleData};
use crate::config::Config;
use crate::error::Result;
use crate::temperature::celsius_to_fahrenheit;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// The status command implementation.
pub struct StatusCommand {
    config: Config,
    json: bool,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(config: &Config, json: bool) -> Self {
        Self {
            config: config.clone(),
            json,
        }
    }
}

impl Command for StatusCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;

        if !vehicle.is_online() {
            ui.status("⏳ Waking vehicle...");
            session::ensure_online(cloud, ui, &mut vehicle)?;
        }

        let data = cloud.vehicle_data(&vehicle)?;
        for line in summary_lines(&vehicle, &data) {
            ui.message(&line);
        }

        if self.json {
            ui.message(&serde_json::to_string_pretty(data.raw())?);
        }

        Ok(CommandResult::success())
    }
}

/// Format a Celsius reading with its Fahrenheit equivalent.
///
/// The Celsius value keeps its decimal point (`21.0`, not `21`).
pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{:?}°C ({:.0}°F)", c, celsius_to_fahrenheit(c)),
        None => "--°C (--°F)".to_string(),
    }
}

/// The human-readable status report.
pub fn summary_lines(vehicle: &Vehicle, data: &VehicleData) -> Vec<String> {
    let charge = &data.charge_state;
    let climate = &data.climate_state;
    let body = &data.vehicle_state;

    vec![
        format!("🚗 {}", vehicle.name()),
        format!("   State: {}", vehicle.state),
        format!(
            "   Battery: {}% ({:.0} mi)",
            charge.battery_level, charge.battery_range
        ),
        format!("   Charging: {}", charge.charging_state),
        format!("   Inside temp: {}", format_temperature(climate.inside_temp)),
        format!("   Outside temp: {}", format_temperature(climate.outside_temp)),
        format!("   Climate on: {}", climate.is_climate_on),
        format!("   Locked: {}", body.locked),
        format!("   Odometer: {:.0} mi", body.odometer),
    ]
}
