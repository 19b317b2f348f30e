//! Named remote commands.

use serde_json::{json, Value};

/// A remote command sent to the vehicle.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleCommand {
    Lock,
    Unlock,
    ClimateOn,
    ClimateOff,
    /// Cabin target temperatures in Celsius.
    SetTemps { driver_temp: f64, passenger_temp: f64 },
    StartCharge,
    StopCharge,
    HonkHorn,
    FlashLights,
}

impl VehicleCommand {
    /// Fixed identifier naming the command.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::ClimateOn => "CLIMATE_ON",
            Self::ClimateOff => "CLIMATE_OFF",
            Self::SetTemps { .. } => "CHANGE_CLIMATE_TEMPERATURE_SETTING",
            Self::StartCharge => "START_CHARGE",
            Self::StopCharge => "STOP_CHARGE",
            Self::HonkHorn => "HONK_HORN",
            Self::FlashLights => "FLASH_LIGHTS",
        }
    }

    /// Owner API endpoint under `/api/1/vehicles/{id}/command/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Lock => "door_lock",
            Self::Unlock => "door_unlock",
            Self::ClimateOn => "auto_conditioning_start",
            Self::ClimateOff => "auto_conditioning_stop",
            Self::SetTemps { .. } => "set_temps",
            Self::StartCharge => "charge_start",
            Self::StopCharge => "charge_stop",
            Self::HonkHorn => "honk_horn",
            Self::FlashLights => "flash_lights",
        }
    }

    /// JSON request body.
    pub fn params(&self) -> Value {
        match self {
            Self::SetTemps {
                driver_temp,
                passenger_temp,
            } => json!({
                "driver_temp": driver_temp,
                "passenger_temp": passenger_temp,
            }),
            _ => json!({}),
        }
    }
}
