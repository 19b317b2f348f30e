//! Error types for vehicle operations.
//!
//! This module defines [`TeslaError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TeslaError` for failures the user can act on (no vehicles, bad
//!   callback URL, rejected command)
//! - Transport and decoding failures wrap the underlying crate error
//! - Every variant renders as a single line; `main` prefixes it with
//!   `❌ Error:` and exits 1

use thiserror::Error;

/// Core error type for vehicle operations.
#[derive(Debug, Error)]
pub enum TeslaError {
    /// The account has no registered vehicles.
    #[error("No vehicles found on this account")]
    NoVehicles,

    /// Authentication was refused or could not be completed.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// The pasted OAuth callback URL could not be used.
    #[error("Invalid callback URL: {message}")]
    InvalidCallback { message: String },

    /// The cloud API answered with a non-success status.
    #[error("API request failed with HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The vehicle rejected a command.
    #[error("Command {command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The vehicle did not come online in time.
    #[error("Vehicle {vin} did not wake up within {seconds}s")]
    WakeTimeout { vin: String, seconds: u64 },

    /// `climate temp` was given without a value.
    #[error("A temperature value is required for 'climate temp'")]
    MissingTemperature,

    /// The temperature argument is not a number.
    #[error("Invalid temperature value: {value}")]
    InvalidTemperature { value: String },

    /// The vehicle did not report GPS coordinates.
    #[error("Vehicle location is unavailable")]
    LocationUnavailable,

    /// No home directory to place the token cache in.
    #[error("Could not determine home directory for the token cache")]
    NoHomeDirectory,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON from the API or the token cache.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vehicle operations.
pub type Result<T> = std::result::Result<T, TeslaError>;
