//! tesla-remote - Control a Tesla vehicle from the command line.
//!
//! Signs in to the Tesla Owner API with OAuth, caches the token per
//! account, and drives the first vehicle on that account: status,
//! locks, climate, charging, location, horn, lights, and wake-up.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and commands
//! - [`cloud`] - Owner API client, OAuth login, token cache, and mock
//! - [`config`] - Start-up configuration from flags and environment
//! - [`error`] - Error types and result aliases
//! - [`temperature`] - Fahrenheit/Celsius conversion
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use tesla_remote::temperature::fahrenheit_to_celsius;
//!
//! let celsius = fahrenheit_to_celsius(70.0);
//! assert!((celsius - 21.111).abs() < 0.001);
//! ```
//!
//! For end-to-end behavior against a mock server, see the integration tests.

pub mod cli;
pub mod cloud;
pub mod config;
pub mod error;
pub mod temperature;
pub mod ui;

pub use error::{Result, TeslaError};
