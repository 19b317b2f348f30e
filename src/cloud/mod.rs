//! Vehicle cloud client.
//!
//! This module provides:
//! - [`VehicleCloud`] trait, the seam between commands and the cloud
//! - [`OwnerApiClient`] for the real Owner API over HTTPS
//! - [`MockCloud`] for tests
//! - Model types ([`Vehicle`], [`VehicleData`]) and [`VehicleCommand`]
//!
//! # Example
//!
//! ```
//! use tesla_remote::cloud::{FixedCallback, MockCloud, VehicleCloud, VehicleCommand};
//!
//! let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
//! let mut callback = FixedCallback::new("https://auth.tesla.com/void/callback?code=x");
//! cloud.authenticate("me@example.com", &mut callback).unwrap();
//!
//! let mut vehicle = cloud.vehicle_list().unwrap().remove(0);
//! cloud.sync_wake_up(&mut vehicle).unwrap();
//! cloud.command(&vehicle, &VehicleCommand::HonkHorn).unwrap();
//! assert!(vehicle.is_online());
//! ```

pub mod command;
pub mod mock;
pub mod model;
pub mod oauth;
pub mod owner;
pub mod token;

pub use command::VehicleCommand;
pub use mock::{CloudCall, MockCloud};
pub use model::{ChargeState, ClimateState, DriveState, Vehicle, VehicleData, VehicleState};
pub use owner::OwnerApiClient;
pub use token::{CachedToken, TokenCache};

use crate::error::Result;

/// How a session was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// A still-valid token was found in the cache.
    Cached,
    /// The user went through the interactive login.
    Fresh,
}

/// Supplies the OAuth callback URL for an authorize URL.
///
/// The terminal implementation asks the user to sign in and paste the
/// final redirect; tests use [`FixedCallback`].
pub trait CallbackResolver {
    fn resolve(&mut self, authorize_url: &str) -> Result<String>;
}

/// Resolver that always answers with the same URL.
#[derive(Debug, Clone)]
pub struct FixedCallback {
    url: String,
    requested: Vec<String>,
}

impl FixedCallback {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            requested: Vec::new(),
        }
    }

    /// Authorize URLs this resolver was asked about.
    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl CallbackResolver for FixedCallback {
    fn resolve(&mut self, authorize_url: &str) -> Result<String> {
        self.requested.push(authorize_url.to_string());
        Ok(self.url.clone())
    }
}

/// Operations the commands need from the vehicle cloud.
pub trait VehicleCloud {
    /// Establish a session for `email`, running the interactive login
    /// through `callback` when no valid cached token exists.
    fn authenticate(
        &mut self,
        email: &str,
        callback: &mut dyn CallbackResolver,
    ) -> Result<Authorization>;

    /// Vehicles registered on the account.
    fn vehicle_list(&mut self) -> Result<Vec<Vehicle>>;

    /// Block until the vehicle is online, waking it if needed. Updates
    /// `vehicle.state` in place.
    fn sync_wake_up(&mut self, vehicle: &mut Vehicle) -> Result<()>;

    /// Full data for an online vehicle.
    fn vehicle_data(&mut self, vehicle: &Vehicle) -> Result<VehicleData>;

    /// Send a remote command.
    fn command(&mut self, vehicle: &Vehicle, command: &VehicleCommand) -> Result<()>;
}
