//! Wake command implementation.

use crate::cloud::VehicleCloud;
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

/// `tesla wake`: wake the vehicle and wait until it reports online.
pub struct WakeCommand {
    config: Config,
}

impl WakeCommand {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Command for WakeCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;

        ui.status("⏳ Waking vehicle...");
        session::ensure_online(cloud, ui, &mut vehicle)?;
        ui.message("✅ Vehicle is awake");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::test_config;
    use crate::cloud::{CloudCall, MockCloud};
    use crate::ui::MockUI;

    #[test]
    fn wakes_and_confirms() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        let mut ui = MockUI::new();

        WakeCommand::new(&test_config())
            .execute(&mut cloud, &mut ui)
            .unwrap();

        assert_eq!(
            cloud.calls().last(),
            Some(&CloudCall::WakeUp("5YJ3E1EA7KF000001".to_string()))
        );
        assert!(ui.has_status("⏳ Waking vehicle..."));
        assert_eq!(ui.messages(), &["✅ Vehicle is awake".to_string()]);
    }

    #[test]
    fn wake_timeout_is_reported() {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        cloud.fail_on("sync_wake_up", "Vehicle did not come online");
        let mut ui = MockUI::new();

        let err = WakeCommand::new(&test_config())
            .execute(&mut cloud, &mut ui)
            .unwrap_err();
        assert!(err.to_string().contains("did not come online"));
        assert!(ui.messages().is_empty());
    }
}
