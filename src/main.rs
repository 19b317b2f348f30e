//! tesla-remote CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tesla_remote::cli::{Cli, CommandDispatcher};
use tesla_remote::cloud::OwnerApiClient;
use tesla_remote::config::Config;
use tesla_remote::ui::{TerminalUI, UserInterface};
use tesla_remote::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so stdout stays clean for `--json` output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tesla_remote=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tesla_remote=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> Result<i32> {
    let config = Config::from_cli(cli)?;
    let mut cloud = OwnerApiClient::new(&config)?;
    let dispatcher = CommandDispatcher::new(config);
    let result = dispatcher.dispatch(cli, &mut cloud, ui)?;
    Ok(result.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("tesla-remote starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    match run(&cli, &mut ui) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
