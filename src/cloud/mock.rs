//! In-memory vehicle cloud for testing.
//!
//! `MockCloud` implements [`VehicleCloud`] and records every call in
//! order, so tests can assert on call sequencing (for example that the
//! wake-up happens before a command). Any operation can be made to fail.
//!
//! # Example
//!
//! ```
//! use tesla_remote::cloud::{CloudCall, FixedCallback, MockCloud, VehicleCloud};
//!
//! let mut cloud = MockCloud::new();
//! cloud.fail_on("vehicle_list", "service unavailable");
//!
//! let mut callback = FixedCallback::new("unused");
//! cloud.authenticate("me@example.com", &mut callback).unwrap();
//! assert!(cloud.vehicle_list().is_err());
//! assert_eq!(
//!     cloud.calls(),
//!     &[
//!         CloudCall::Authenticate("me@example.com".to_string()),
//!         CloudCall::VehicleList,
//!     ]
//! );
//! ```

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::{Result, TeslaError};

use super::{
    Authorization, CallbackResolver, Vehicle, VehicleCloud, VehicleCommand, VehicleData,
};

/// A recorded call against the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum CloudCall {
    Authenticate(String),
    VehicleList,
    WakeUp(String),
    VehicleData(String),
    Command(VehicleCommand),
}

impl CloudCall {
    /// Whether this is a wake-up call.
    pub fn is_wake_up(&self) -> bool {
        matches!(self, Self::WakeUp(_))
    }
}

/// Mock vehicle cloud.
#[derive(Debug, Clone)]
pub struct MockCloud {
    authorization: Authorization,
    run_login: bool,
    vehicles: Vec<Vehicle>,
    data: Value,
    failures: HashMap<String, String>,
    calls: Vec<CloudCall>,
}

impl Default for MockCloud {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCloud {
    /// An account with no vehicles and a cached session.
    pub fn new() -> Self {
        Self {
            authorization: Authorization::Cached,
            run_login: false,
            vehicles: Vec::new(),
            data: json!({}),
            failures: HashMap::new(),
            calls: Vec::new(),
        }
    }

    /// An account with a single vehicle.
    pub fn with_vehicle(vehicle: Vehicle) -> Self {
        Self {
            vehicles: vec![vehicle],
            ..Self::new()
        }
    }

    /// A sample vehicle in the given state.
    pub fn vehicle(state: &str) -> Vehicle {
        Vehicle {
            id: 1492931520123456,
            vin: "5YJ3E1EA7KF000001".to_string(),
            display_name: Some("Roadrunner".to_string()),
            state: state.to_string(),
        }
    }

    /// Raw `vehicle_data` document returned by [`VehicleCloud::vehicle_data`].
    pub fn set_vehicle_data(&mut self, data: Value) {
        self.data = data;
    }

    /// Make `authenticate` report a fresh login and consult the resolver.
    pub fn require_login(&mut self) {
        self.authorization = Authorization::Fresh;
        self.run_login = true;
    }

    /// Make the named operation fail with `message`.
    ///
    /// Names: `authenticate`, `vehicle_list`, `sync_wake_up`,
    /// `vehicle_data`, `command`.
    pub fn fail_on(&mut self, operation: &str, message: &str) {
        self.failures
            .insert(operation.to_string(), message.to_string());
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> &[CloudCall] {
        &self.calls
    }

    /// Commands sent so far, in order.
    pub fn commands(&self) -> Vec<&VehicleCommand> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                CloudCall::Command(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }

    /// Position of the first wake-up call, if any.
    pub fn wake_index(&self) -> Option<usize> {
        self.calls.iter().position(CloudCall::is_wake_up)
    }

    fn check(&self, operation: &str) -> Result<()> {
        match self.failures.get(operation) {
            Some(message) => Err(TeslaError::Other(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

impl VehicleCloud for MockCloud {
    fn authenticate(
        &mut self,
        email: &str,
        callback: &mut dyn CallbackResolver,
    ) -> Result<Authorization> {
        self.calls.push(CloudCall::Authenticate(email.to_string()));
        self.check("authenticate")?;
        if self.run_login {
            callback.resolve("https://auth.tesla.com/oauth2/v3/authorize?client_id=ownerapi")?;
        }
        Ok(self.authorization)
    }

    fn vehicle_list(&mut self) -> Result<Vec<Vehicle>> {
        self.calls.push(CloudCall::VehicleList);
        self.check("vehicle_list")?;
        Ok(self.vehicles.clone())
    }

    fn sync_wake_up(&mut self, vehicle: &mut Vehicle) -> Result<()> {
        self.calls.push(CloudCall::WakeUp(vehicle.vin.clone()));
        self.check("sync_wake_up")?;
        vehicle.state = super::model::ONLINE.to_string();
        Ok(())
    }

    fn vehicle_data(&mut self, vehicle: &Vehicle) -> Result<VehicleData> {
        self.calls.push(CloudCall::VehicleData(vehicle.vin.clone()));
        self.check("vehicle_data")?;
        VehicleData::from_value(self.data.clone())
    }

    fn command(&mut self, _vehicle: &Vehicle, command: &VehicleCommand) -> Result<()> {
        self.calls.push(CloudCall::Command(command.clone()));
        self.check("command")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::FixedCallback;

    #[test]
    fn records_calls_in_order() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        let mut callback = FixedCallback::new("unused");

        cloud.authenticate("a@example.com", &mut callback).unwrap();
        let mut vehicle = cloud.vehicle_list().unwrap().remove(0);
        cloud.sync_wake_up(&mut vehicle).unwrap();
        cloud.command(&vehicle, &VehicleCommand::Lock).unwrap();

        assert_eq!(cloud.calls().len(), 4);
        assert_eq!(cloud.wake_index(), Some(2));
        assert_eq!(cloud.commands(), vec![&VehicleCommand::Lock]);
        assert!(vehicle.is_online());
    }

    #[test]
    fn cached_session_skips_resolver() {
        let mut cloud = MockCloud::new();
        let mut callback = FixedCallback::new("unused");
        let outcome = cloud.authenticate("a@example.com", &mut callback).unwrap();

        assert_eq!(outcome, Authorization::Cached);
        assert!(callback.requested().is_empty());
    }

    #[test]
    fn login_consults_resolver() {
        let mut cloud = MockCloud::new();
        cloud.require_login();
        let mut callback = FixedCallback::new("https://auth.tesla.com/void/callback?code=x");
        let outcome = cloud.authenticate("a@example.com", &mut callback).unwrap();

        assert_eq!(outcome, Authorization::Fresh);
        assert_eq!(callback.requested().len(), 1);
    }

    #[test]
    fn injected_failure_is_returned_and_recorded() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("online"));
        cloud.fail_on("command", "vehicle unavailable");

        let vehicle = MockCloud::vehicle("online");
        let err = cloud
            .command(&vehicle, &VehicleCommand::HonkHorn)
            .unwrap_err();

        assert_eq!(err.to_string(), "vehicle unavailable");
        assert_eq!(cloud.commands(), vec![&VehicleCommand::HonkHorn]);
    }

    #[test]
    fn vehicle_data_comes_from_fixture() {
        let mut cloud = MockCloud::new();
        cloud.set_vehicle_data(json!({"vehicle_state": {"locked": true, "odometer": 10.0}}));

        let data = cloud.vehicle_data(&MockCloud::vehicle("online")).unwrap();
        assert!(data.vehicle_state.locked);
    }
}
