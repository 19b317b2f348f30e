//! Charge command implementation.

use crate::cli::args::{ChargeAction, ChargeArgs};
use crate::cloud::{ChargeState, VehicleCloud, VehicleCommand};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session;

const CHARGING: &str = "Charging";

/// `tesla charge status|start|stop`.
pub struct ChargeCommand {
    config: Config,
    args: ChargeArgs,
}

impl ChargeCommand {
    /// Create a new charge command.
    pub fn new(config: &Config, args: ChargeArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }
}

impl Command for ChargeCommand {
    fn execute(
        &self,
        cloud: &mut dyn VehicleCloud,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut vehicle = session::connect(&self.config, cloud, ui)?;
        session::ensure_online(cloud, ui, &mut vehicle)?;

        match self.args.action {
            ChargeAction::Status => {
                let data = cloud.vehicle_data(&vehicle)?;
                for line in charge_lines(&data.charge_state) {
                    ui.message(&line);
                }
            }
            ChargeAction::Start => {
                cloud.command(&vehicle, &VehicleCommand::StartCharge)?;
                ui.message("⚡ Charging started");
            }
            ChargeAction::Stop => {
                cloud.command(&vehicle, &VehicleCommand::StopCharge)?;
                ui.message("🛑 Charging stopped");
            }
        }

        Ok(CommandResult::success())
    }
}

/// Battery report; time left and rate only while charging.
pub fn charge_lines(charge: &ChargeState) -> Vec<String> {
    let mut lines = vec![
        format!("🔋 Battery: {}%", charge.battery_level),
        format!("   Range: {:.0} mi", charge.battery_range),
        format!("   State: {}", charge.charging_state),
        format!("   Limit: {}%", charge.charge_limit_soc),
    ];

    if charge.charging_state == CHARGING {
        lines.push(format!("   Time left: {:.1} hrs", charge.time_to_full_charge));
        lines.push(format!("   Rate: {} mph", charge.charge_rate));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::{charging_fixture, test_config};
    use crate::cloud::{CloudCall, MockCloud};
    use crate::ui::MockUI;
    use serde_json::json;

    fn run(action: ChargeAction, data: serde_json::Value) -> (MockCloud, MockUI) {
        let mut cloud = MockCloud::with_vehicle(MockCloud::vehicle("asleep"));
        cloud.set_vehicle_data(data);
        let mut ui = MockUI::new();
        ChargeCommand::new(&test_config(), ChargeArgs { action })
            .execute(&mut cloud, &mut ui)
            .unwrap();
        (cloud, ui)
    }

    #[test]
    fn status_while_charging_shows_time_and_rate() {
        let (cloud, ui) = run(ChargeAction::Status, charging_fixture());

        assert_eq!(
            ui.messages(),
            &[
                "🔋 Battery: 72%".to_string(),
                "   Range: 216 mi".to_string(),
                "   State: Charging".to_string(),
                "   Limit: 90%".to_string(),
                "   Time left: 1.5 hrs".to_string(),
                "   Rate: 25 mph".to_string(),
            ]
        );
        assert!(cloud.commands().is_empty());
        assert_eq!(
            cloud.calls().last(),
            Some(&CloudCall::VehicleData("5YJ3E1EA7KF000001".to_string()))
        );
    }

    #[test]
    fn status_when_not_charging_omits_time_and_rate() {
        let (_, ui) = run(
            ChargeAction::Status,
            json!({
                "charge_state": {
                    "battery_level": 80,
                    "battery_range": 240.2,
                    "charging_state": "Complete",
                    "charge_limit_soc": 80
                }
            }),
        );

        assert_eq!(ui.messages().len(), 4);
        assert!(ui.has_message("State: Complete"));
        assert!(!ui.has_message("Time left"));
        assert!(!ui.has_message("Rate"));
    }

    #[test]
    fn start_and_stop() {
        let (cloud, ui) = run(ChargeAction::Start, json!({}));
        assert_eq!(cloud.commands(), vec![&VehicleCommand::StartCharge]);
        assert!(ui.has_message("⚡ Charging started"));

        let (cloud, ui) = run(ChargeAction::Stop, json!({}));
        assert_eq!(cloud.commands(), vec![&VehicleCommand::StopCharge]);
        assert!(ui.has_message("🛑 Charging stopped"));
    }
}
