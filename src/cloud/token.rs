//! Persistent OAuth token cache.
//!
//! Tokens live in a single JSON file keyed by account email. The file
//! survives across runs; nothing else in the crate reads it.

use chrono::{DateTime, Duration, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TeslaError};

/// Tokens expiring sooner than this are treated as already expired.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Tokens for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Build from a token endpoint response received at `now`.
    ///
    /// An `expires_in` that does not fit the calendar is an auth error.
    pub fn issued(
        access_token: String,
        refresh_token: Option<String>,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let expires_at = TimeDelta::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| TeslaError::Auth {
                message: format!(
                    "token endpoint returned an invalid expires_in: {}",
                    expires_in
                ),
            })?;

        Ok(Self {
            access_token,
            refresh_token,
            expires_at,
        })
    }

    /// Whether the token can still be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

/// On-disk token cache.
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
    accounts: BTreeMap<String, CachedToken>,
}

impl TokenCache {
    /// Load the cache, starting empty if the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        let accounts = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| TeslaError::Auth {
                    message: format!("token cache {} is corrupt: {}", path.display(), e),
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), accounts = accounts.len(), "loaded token cache");

        Ok(Self {
            path: path.to_path_buf(),
            accounts,
        })
    }

    /// Cached token for an account, if any.
    pub fn get(&self, email: &str) -> Option<&CachedToken> {
        self.accounts.get(&normalize(email))
    }

    /// A token for the account that is still valid at `now`.
    pub fn valid_token(&self, email: &str, now: DateTime<Utc>) -> Option<&CachedToken> {
        self.get(email).filter(|t| t.is_valid_at(now))
    }

    /// Store a token for an account (in memory; call [`save`](Self::save)).
    pub fn insert(&mut self, email: &str, token: CachedToken) {
        self.accounts.insert(normalize(email), token);
    }

    /// Write the cache to disk.
    ///
    /// Writes to a temp file and renames it over the cache so a crash never
    /// leaves a half-written file. On Unix the file is readable by the
    /// owner only.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.accounts)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        restrict_permissions(&temp_path)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "saved token cache");
        Ok(())
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
