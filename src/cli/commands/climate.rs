//! Climate command implementation.
//!
//! `tesla climate on|off` toggles cabin conditioning; `tesla climate temp
//! <value>` sets both seats to the same target. The value is read as
//! Fahrenheit unless `--celsius` is given, and is always sent in Celsius.

use crate::cli::args::{ClimateAction, ClimateArgs};
use crate::cloud::{VehicleCloud, VehicleCommand};
use crate::config::Config;
use crate::error::{Result, TeslaError};
use crate::temperature::fahrenheit_to_celsius;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// The climate command implementation.
pub struct ClimateCommand {
    config: Config,
    args: ClimateArgs,
}

impl ClimateCommand {
    /// Create a new climate command.
    pub fn new(config: &Config, args: ClimateArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// The requested temperature, as typed and converted to Celsius.
    fn target(&self) -> Result<(&str, f64)> {
        let raw = self
            .args
            .value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(TeslaError::MissingTemperature)?;

        let value: f64 = raw.parse().map_err(|_| TeslaError::InvalidTemperature {
            value: raw.to_string(),
        })?;
        if !value.is_finite() {
            return Err(TeslaError::InvalidTemperature {
                value: raw.to_string(),
            });
        }

        let celsius = if self.args.is_fahrenheit() {
            fahrenheit_to_celsius(value)
        } else {
            value
        };
        Ok((raw, celsius))
    }
}

impl Command for ClimateCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        // Reject a bad temperature before touching the network.
        let target = match self.args.action {
            ClimateAction::Temp => Some(self.target()?),
            ClimateAction::On | ClimateAction::Off => None,
        };

        let mut vehicle = session::connect(&self.config, cloud, ui)?;
        session::ensure_online(cloud, ui, &mut vehicle)?;

        match (self.args.action, target) {
            (ClimateAction::On, _) => {
                cloud.command(&vehicle, &VehicleCommand::ClimateOn)?;
                ui.message("❄️ Climate turned on");
            }
            (ClimateAction::Off, _) => {
                cloud.command(&vehicle, &VehicleCommand::ClimateOff)?;
                ui.message("🌡️ Climate turned off");
            }
            (ClimateAction::Temp, Some((value, celsius))) => {
                tracing::debug!(value, celsius, "setting cabin temperature");
                let command = VehicleCommand::SetTemps {
                    driver_temp: celsius,
                    passenger_temp: celsius,
                };
                cloud.command(&vehicle, &command)?;
                let unit = if self.args.is_fahrenheit() { "F" } else { "C" };
                ui.message(&format!("🌡️ Temperature set to {}°{}", value, unit));
            }
            (ClimateAction::Temp, None) => return Err(TeslaError::MissingTemperature),
        }

        Ok(CommandResult::success())
    }
}
