//! Start-up configuration.
//!
//! Everything that would otherwise be a global (cache location, account
//! email, service endpoints, wake timing) is collected once in [`Config`]
//! and handed to the dispatcher.
//!
//! # Example
//!
//! ```
//! use tesla_remote::config::Config;
//! use std::path::PathBuf;
//!
//! let config = Config::new(PathBuf::from("/tmp/tokens.json"))
//!     .with_email(Some("me@example.com".to_string()));
//! assert_eq!(config.email.as_deref(), Some("me@example.com"));
//! assert_eq!(config.owner_api_url, Config::DEFAULT_OWNER_API_URL);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{Result, TeslaError};

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Account email from `--email` or `TESLA_EMAIL`; prompted for if absent.
    pub email: Option<String>,
    /// Token cache file.
    pub cache_file: PathBuf,
    /// Owner API base URL.
    pub owner_api_url: String,
    /// SSO base URL.
    pub auth_url: String,
    /// Give up waiting for a vehicle to wake after this long.
    pub wake_timeout: Duration,
    /// Delay between wake polls.
    pub wake_interval: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl Config {
    pub const DEFAULT_OWNER_API_URL: &'static str = "https://owner-api.teslamotors.com";
    pub const DEFAULT_AUTH_URL: &'static str = "https://auth.tesla.com";
    /// Token cache file name, placed in the home directory.
    pub const CACHE_FILE_NAME: &'static str = ".tesla_cache.json";

    /// Defaults with an explicit cache file.
    pub fn new(cache_file: PathBuf) -> Self {
        Self {
            email: None,
            cache_file,
            owner_api_url: Self::DEFAULT_OWNER_API_URL.to_string(),
            auth_url: Self::DEFAULT_AUTH_URL.to_string(),
            wake_timeout: Duration::from_secs(60),
            wake_interval: Duration::from_secs(2),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Build from parsed arguments (environment already folded in by clap).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cache_file = match &cli.cache_file {
            Some(path) => path.clone(),
            None => Self::default_cache_file()?,
        };

        let mut config = Self::new(cache_file).with_email(cli.email.clone());
        if let Some(url) = &cli.owner_api_url {
            config.owner_api_url = url.clone();
        }
        if let Some(url) = &cli.auth_url {
            config.auth_url = url.clone();
        }
        Ok(config)
    }

    /// `~/.tesla_cache.json`
    pub fn default_cache_file() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(Self::CACHE_FILE_NAME))
            .ok_or(TeslaError::NoHomeDirectory)
    }

    /// Set the account email, ignoring blank values.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self
    }

    /// Override wake polling (tests use millisecond values).
    pub fn with_wake_timing(mut self, timeout: Duration, interval: Duration) -> Self {
        self.wake_timeout = timeout;
        self.wake_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let config = Config::new(PathBuf::from("/tmp/cache.json"));
        assert_eq!(config.owner_api_url, "https://owner-api.teslamotors.com");
        assert_eq!(config.auth_url, "https://auth.tesla.com");
        assert_eq!(config.wake_timeout, Duration::from_secs(60));
        assert!(config.email.is_none());
    }

    #[test]
    fn blank_email_is_ignored() {
        let config = Config::new(PathBuf::from("c.json")).with_email(Some("  ".to_string()));
        assert!(config.email.is_none());
    }

    #[test]
    fn email_is_trimmed() {
        let config =
            Config::new(PathBuf::from("c.json")).with_email(Some(" me@example.com ".to_string()));
        assert_eq!(config.email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn from_cli_uses_overrides() {
        let cli = Cli::parse_from([
            "tesla",
            "--email",
            "me@example.com",
            "--cache-file",
            "/tmp/tokens.json",
            "--owner-api-url",
            "http://127.0.0.1:9000",
            "--auth-url",
            "http://127.0.0.1:9001",
            "status",
        ]);
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.email.as_deref(), Some("me@example.com"));
        assert_eq!(config.cache_file, PathBuf::from("/tmp/tokens.json"));
        assert_eq!(config.owner_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.auth_url, "http://127.0.0.1:9001");
    }

    #[test]
    fn default_cache_file_is_in_home() {
        if let Ok(path) = Config::default_cache_file() {
            assert!(path.ends_with(".tesla_cache.json"));
        }
    }
}
