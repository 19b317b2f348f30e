//! Sign-in, vehicle lookup, and wake handling shared by the commands.

use crate::cloud::{Authorization, CallbackResolver, Vehicle, VehicleCloud};
use crate::config::Config;
use crate::error::{Result, TeslaError};
use crate::ui::{Prompt, UserInterface};

/// Account email: `--email`/`TESLA_EMAIL`, else ask.
pub fn resolve_email(config: &Config, ui: &mut dyn UserInterface) -> Result<String> {
    if let Some(email) = &config.email {
        return Ok(email.clone());
    }

    let email = ui.prompt(&Prompt::new("email", "Tesla email"))?;
    let email = email.trim();
    if email.is_empty() {
        return Err(TeslaError::Auth {
            message: "an account email is required".to_string(),
        });
    }
    Ok(email.to_string())
}

/// Asks the user to sign in in a browser and paste the final redirect URL.
pub struct UiCallback<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> UiCallback<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }
}

impl CallbackResolver for UiCallback<'_> {
    fn resolve(&mut self, authorize_url: &str) -> Result<String> {
        self.ui.message("");
        self.ui.message("🔐 Open this URL in your browser:");
        self.ui.link(authorize_url);
        self.ui.message("");
        self.ui.message("Log in to Tesla, then paste the final URL here");
        self.ui
            .message("(it will start with https://auth.tesla.com/void/callback?...)");
        self.ui.message("");
        self.ui.prompt(&Prompt::new("callback_url", "Callback URL"))
    }
}

/// Establish a session, announcing a fresh login.
pub fn sign_in(
    config: &Config,
    cloud: &mut dyn VehicleCloud,
    ui: &mut dyn UserInterface,
) -> Result<Authorization> {
    let email = resolve_email(config, ui)?;
    let authorization = cloud.authenticate(&email, &mut UiCallback::new(ui))?;
    if authorization == Authorization::Fresh {
        ui.message("✅ Authenticated successfully!");
    }
    Ok(authorization)
}

/// The first vehicle on the account.
pub fn first_vehicle(cloud: &mut dyn VehicleCloud) -> Result<Vehicle> {
    cloud
        .vehicle_list()?
        .into_iter()
        .next()
        .ok_or(TeslaError::NoVehicles)
}

/// Sign in and pick the vehicle to control.
pub fn connect(
    config: &Config,
    cloud: &mut dyn VehicleCloud,
    ui: &mut dyn UserInterface,
) -> Result<Vehicle> {
    sign_in(config, cloud, ui)?;
    let vehicle = first_vehicle(cloud)?;
    tracing::debug!(vin = %vehicle.vin, state = %vehicle.state, "selected vehicle");
    Ok(vehicle)
}

/// Block until the vehicle is online.
pub fn ensure_online(
    cloud: &mut dyn VehicleCloud,
    ui: &mut dyn UserInterface,
    vehicle: &mut Vehicle,
) -> Result<()> {
    let mut spinner =
        ui.start_spinner(&format!("Waiting for {} to come online", vehicle.name()));
    let result = cloud.sync_wake_up(vehicle);
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::test_config;
    use crate::cloud::{CloudCall, MockCloud};
    use crate::ui::MockUI;

    #[test]
    fn configured_email_skips_prompt() {
        let mut ui = MockUI::new();
        let email = resolve_email(&test_config(), &mut ui).unwrap();
        assert_eq!(email, "me@example.com");
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn missing_email_is_prompted_for() {
        let config = test_config().with_email(None);
        let mut ui = MockUI::new();
        ui.set_prompt_response("email", " typed@example.com ");

        let email = resolve_email(&config, &mut ui).unwrap();
        assert_eq!(email, "typed@example.com");
        assert_eq!(ui.prompts_shown(), &["email".to_string()]);
    }

    #[test]
    fn empty_prompted_email_is_an_error() {
        let config = test_config().with_email(None);
        let mut ui = MockUI::new();
        ui.set_prompt_response("email", "");

        let err = resolve_email(&config, &mut ui).unwrap_err();
        assert!(matches!(err, TeslaError::Auth { .. }));
    }

    #[test]
    fn callback_prompt_shows_url_first() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("callback_url", "https://auth.tesla.com/void/callback?code=x");

        let pasted = UiCallback::new(&mut ui)
            .resolve("https://auth.tesla.com/oauth2/v3/authorize?x=1")
            .unwrap();

        assert_eq!(pasted, "https://auth.tesla.com/void/callback?code=x");
        assert!(ui.has_message("Open this URL"));
        assert_eq!(
            ui.links(),
            &["https://auth.tesla.com/oauth2/v3/authorize?x=1".to_string()]
        );
        assert_eq!(ui.prompts_shown(), &["callback_url".to_string()]);
    }

    #[test]
    fn fresh_login_is_announced() {
        let mut cloud = MockCloud::new();
        cloud.require_login();
        let mut ui = MockUI::new();
        ui.set_prompt_response("callback_url", "https://auth.tesla.com/void/callback?code=x");

        let outcome = sign_in(&test_config(), &mut cloud, &mut ui).unwrap();
        assert_eq!(outcome, Authorization::Fresh);
        assert!(ui.has_message("✅ Authenticated successfully!"));
    }

    #[test]
    fn cached_login_is_quiet() {
        let mut cloud = MockCloud::new();
        let mut ui = MockUI::new();

        sign_in(&test_config(), &mut cloud, &mut ui).unwrap();
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn failed_wake_still_clears_spinner() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        cloud.fail_on("sync_wake_up", "timed out");
        let mut ui = MockUI::new();
        let mut vehicle = MockCloud::vehicle("asleep");

        assert!(ensure_online(&mut cloud, &mut ui, &mut vehicle).is_err());
        assert_eq!(ui.spinners_cleared(), 1);
    }

    #[test]
    fn first_vehicle_requires_one() {
        let mut cloud = MockCloud::new();
        assert!(matches!(
            first_vehicle(&mut cloud).unwrap_err(),
            TeslaError::NoVehicles
        ));
    }

    #[test]
    fn ensure_online_shows_spinner_and_wakes() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        let mut ui = MockUI::new();
        let mut vehicle = MockCloud::vehicle("asleep");

        ensure_online(&mut cloud, &mut ui, &mut vehicle).unwrap();

        assert!(vehicle.is_online());
        assert_eq!(ui.spinners().len(), 1);
        assert_eq!(ui.spinners_cleared(), 1);
        assert_eq!(
            cloud.calls(),
            &[CloudCall::WakeUp("5YJ3E1EA7KF000001".to_string())]
        );
    }
}
