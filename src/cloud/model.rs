//! Vehicle records returned by the cloud API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// State string reported by a vehicle whose connectivity is up.
pub const ONLINE: &str = "online";

/// A vehicle summary as listed on the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Cloud-side identifier used in request paths.
    pub id: u64,
    /// Vehicle identification number.
    pub vin: String,
    /// Owner-assigned name, if any.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Connectivity state: `online`, `asleep`, or `offline`.
    pub state: String,
}

impl Vehicle {
    /// Whether the vehicle currently accepts commands.
    pub fn is_online(&self) -> bool {
        self.state == ONLINE
    }

    /// Display name, falling back to the VIN for unnamed vehicles.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.vin)
    }
}

/// Charging subsystem state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChargeState {
    pub battery_level: i64,
    /// Estimated range in miles.
    pub battery_range: f64,
    /// `Charging`, `Complete`, `Disconnected`, `Stopped`, ...
    pub charging_state: String,
    pub charge_limit_soc: i64,
    /// Hours until the charge limit is reached.
    pub time_to_full_charge: f64,
    /// Miles of range added per hour.
    pub charge_rate: f64,
}

/// Cabin climate state. Temperatures are Celsius and absent while asleep.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClimateState {
    pub inside_temp: Option<f64>,
    pub outside_temp: Option<f64>,
    pub is_climate_on: bool,
}

/// GPS position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriveState {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Body state: locks and odometer (miles).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    pub locked: bool,
    pub odometer: f64,
}

/// Full vehicle data: typed views plus the raw document they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleData {
    pub charge_state: ChargeState,
    pub climate_state: ClimateState,
    pub drive_state: DriveState,
    pub vehicle_state: VehicleState,
    raw: Value,
}

impl VehicleData {
    /// Build the typed view from a raw `vehicle_data` document.
    ///
    /// Missing groups decode to their defaults; present but malformed
    /// groups are an error.
    pub fn from_value(raw: Value) -> Result<Self> {
        Ok(Self {
            charge_state: group(&raw, "charge_state")?,
            climate_state: group(&raw, "climate_state")?,
            drive_state: group(&raw, "drive_state")?,
            vehicle_state: group(&raw, "vehicle_state")?,
            raw,
        })
    }

    /// The document exactly as the API returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

fn group<T>(raw: &Value, key: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match raw.get(key) {
        Some(Value::Null) | None => Ok(T::default()),
        Some(v) => Ok(serde_json::from_value(v.clone())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle(state: &str, name: Option<&str>) -> Vehicle {
        Vehicle {
            id: 1,
            vin: "5YJ3E1EA7KF000001".to_string(),
            display_name: name.map(String::from),
            state: state.to_string(),
        }
    }

    #[test]
    fn online_state_detection() {
        assert!(vehicle("online", None).is_online());
        assert!(!vehicle("asleep", None).is_online());
        assert!(!vehicle("offline", None).is_online());
    }

    #[test]
    fn name_falls_back_to_vin() {
        assert_eq!(vehicle("online", Some("Roadrunner")).name(), "Roadrunner");
        assert_eq!(vehicle("online", None).name(), "5YJ3E1EA7KF000001");
        assert_eq!(vehicle("online", Some("")).name(), "5YJ3E1EA7KF000001");
    }

    #[test]
    fn vehicle_deserializes_from_listing() {
        let v: Vehicle = serde_json::from_value(json!({
            "id": 1492931520123456u64,
            "vehicle_id": 1234,
            "vin": "5YJ3E1EA7KF000001",
            "display_name": "Roadrunner",
            "state": "asleep",
            "in_service": false
        }))
        .unwrap();
        assert_eq!(v.id, 1492931520123456);
        assert_eq!(v.state, "asleep");
    }

    #[test]
    fn vehicle_data_decodes_groups() {
        let data = VehicleData::from_value(json!({
            "charge_state": {
                "battery_level": 80,
                "battery_range": 241.3,
                "charging_state": "Charging",
                "charge_limit_soc": 90,
                "time_to_full_charge": 1.5,
                "charge_rate": 25
            },
            "climate_state": {"inside_temp": 21.5, "outside_temp": 12.0, "is_climate_on": true},
            "drive_state": {"latitude": 37.4, "longitude": -122.1},
            "vehicle_state": {"locked": true, "odometer": 12345.6}
        }))
        .unwrap();

        assert_eq!(data.charge_state.battery_level, 80);
        assert_eq!(data.charge_state.charge_rate, 25.0);
        assert_eq!(data.climate_state.inside_temp, Some(21.5));
        assert!(data.climate_state.is_climate_on);
        assert_eq!(data.drive_state.latitude, Some(37.4));
        assert!(data.vehicle_state.locked);
    }

    #[test]
    fn missing_groups_use_defaults() {
        let data = VehicleData::from_value(json!({"id": 1})).unwrap();
        assert_eq!(data.charge_state, ChargeState::default());
        assert_eq!(data.drive_state.latitude, None);
    }

    #[test]
    fn null_temperatures_are_absent() {
        let data = VehicleData::from_value(json!({
            "climate_state": {"inside_temp": null, "outside_temp": null, "is_climate_on": false}
        }))
        .unwrap();
        assert_eq!(data.climate_state.inside_temp, None);
    }

    #[test]
    fn malformed_group_is_an_error() {
        let result = VehicleData::from_value(json!({"charge_state": {"battery_level": "full"}}));
        assert!(result.is_err());
    }

    #[test]
    fn raw_document_is_retained() {
        let doc = json!({"vin": "X", "vehicle_state": {"locked": false, "odometer": 1.0}});
        let data = VehicleData::from_value(doc.clone()).unwrap();
        assert_eq!(data.raw(), &doc);
    }
}
