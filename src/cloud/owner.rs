//! Owner API client over blocking HTTP.

use chrono::Utc;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{Result, TeslaError};

use super::oauth::{self, Pkce, TokenResponse};
use super::token::{CachedToken, TokenCache};
use super::{Authorization, CallbackResolver, Vehicle, VehicleCloud, VehicleCommand, VehicleData};

/// State groups requested from `vehicle_data`; `location_data` is needed
/// for GPS coordinates on current firmware.
const DATA_ENDPOINTS: &str =
    "charge_state%3Bclimate_state%3Bdrive_state%3Blocation_data%3Bvehicle_state";

/// Longest error body text carried into an error message.
const MAX_ERROR_CHARS: usize = 200;

/// Talks to the Owner API and the SSO token endpoint.
pub struct OwnerApiClient {
    http: Client,
    api_base: String,
    auth_base: String,
    cache_file: PathBuf,
    wake_timeout: Duration,
    wake_interval: Duration,
    access_token: Option<String>,
}

impl OwnerApiClient {
    /// Create a client from start-up configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("tesla-remote/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: config.owner_api_url.trim_end_matches('/').to_string(),
            auth_base: config.auth_url.clone(),
            cache_file: config.cache_file.clone(),
            wake_timeout: config.wake_timeout,
            wake_interval: config.wake_interval,
            access_token: None,
        })
    }

    fn exchange_code(&self, code: &str, pkce: &Pkce) -> Result<TokenResponse> {
        let url = oauth::token_url(&self.auth_base)?;
        let body = json!({
            "grant_type": "authorization_code",
            "client_id": oauth::CLIENT_ID,
            "code": code,
            "code_verifier": pkce.verifier,
            "redirect_uri": oauth::REDIRECT_URI,
        });

        tracing::debug!(url = %url, "exchanging authorization code");
        let response = self.http.post(url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(TeslaError::Auth {
                message: format!(
                    "token exchange returned HTTP {}: {}",
                    status.as_u16(),
                    error_message(&text, status)
                ),
            });
        }
        Ok(response.json()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn get(&self, path: &str) -> Result<Value> {
        self.send(self.http.get(self.url(path)), path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(self.http.post(self.url(path)).json(body), path)
    }

    /// Send an authorized request and unwrap the `response` envelope.
    fn send(&self, request: RequestBuilder, path: &str) -> Result<Value> {
        let token = self.access_token.as_deref().ok_or_else(|| TeslaError::Auth {
            message: "not signed in".to_string(),
        })?;

        let response = request.bearer_auth(token).send()?;
        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "owner api response");
        let text = response.text()?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(TeslaError::Auth {
                message: "access token was rejected; run `tesla auth` to sign in again"
                    .to_string(),
            });
        }
        if !status.is_success() {
            return Err(TeslaError::Api {
                status: status.as_u16(),
                message: error_message(&text, status),
            });
        }

        let mut body: Value = serde_json::from_str(&text)?;
        Ok(body
            .get_mut("response")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}

/// Best human-readable message from an error body.
fn error_message(text: &str, status: StatusCode) -> String {
    if let Ok(body) = serde_json::from_str::<Value>(text) {
        let error = body.get("error").and_then(Value::as_str);
        let description = body
            .get("error_description")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty());
        match (error, description) {
            (Some(e), Some(d)) => return format!("{} ({})", e, d),
            (Some(e), None) => return e.to_string(),
            _ => {}
        }
    }
    // Gateway pages are HTML; their markup is no use in a one-line error.
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }

    let single_line = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > MAX_ERROR_CHARS {
        let cut: String = single_line.chars().take(MAX_ERROR_CHARS).collect();
        format!("{}…", cut)
    } else {
        single_line
    }
}

impl VehicleCloud for OwnerApiClient {
    fn authenticate(
        &mut self,
        email: &str,
        callback: &mut dyn CallbackResolver,
    ) -> Result<Authorization> {
        let mut cache = TokenCache::load(&self.cache_file)?;

        if let Some(token) = cache.valid_token(email, Utc::now()) {
            tracing::debug!("using cached token");
            self.access_token = Some(token.access_token.clone());
            return Ok(Authorization::Cached);
        }

        tracing::debug!("no valid cached token, starting interactive login");
        let pkce = Pkce::generate();
        let authorize_url = oauth::authorize_url(&self.auth_base, email, &pkce)?;
        let pasted = callback.resolve(authorize_url.as_str())?;
        let code = oauth::parse_callback(&pasted, &pkce.state)?;
        let issued = self.exchange_code(&code, &pkce)?;

        let token = CachedToken::issued(
            issued.access_token,
            issued.refresh_token,
            issued.expires_in,
            Utc::now(),
        )?;
        self.access_token = Some(token.access_token.clone());
        cache.insert(email, token);
        cache.save()?;

        Ok(Authorization::Fresh)
    }

    fn vehicle_list(&mut self) -> Result<Vec<Vehicle>> {
        let response = self.get("/api/1/vehicles")?;
        if response.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(response)?)
    }

    fn sync_wake_up(&mut self, vehicle: &mut Vehicle) -> Result<()> {
        if vehicle.is_online() {
            return Ok(());
        }

        let started = Instant::now();
        tracing::debug!(vin = %vehicle.vin, state = %vehicle.state, "waking vehicle");
        let woken = self.post(&format!("/api/1/vehicles/{}/wake_up", vehicle.id), &json!({}))?;
        if let Some(state) = woken.get("state").and_then(Value::as_str) {
            vehicle.state = state.to_string();
        }

        while !vehicle.is_online() {
            if started.elapsed() >= self.wake_timeout {
                return Err(TeslaError::WakeTimeout {
                    vin: vehicle.vin.clone(),
                    seconds: self.wake_timeout.as_secs(),
                });
            }
            thread::sleep(self.wake_interval);

            let current = self.get(&format!("/api/1/vehicles/{}", vehicle.id))?;
            let current: Vehicle = serde_json::from_value(current)?;
            tracing::debug!(state = %current.state, elapsed_ms = started.elapsed().as_millis() as u64, "wake poll");
            vehicle.state = current.state;
        }

        Ok(())
    }

    fn vehicle_data(&mut self, vehicle: &Vehicle) -> Result<VehicleData> {
        let raw = self.get(&format!(
            "/api/1/vehicles/{}/vehicle_data?endpoints={}",
            vehicle.id, DATA_ENDPOINTS
        ))?;
        VehicleData::from_value(raw)
    }

    fn command(&mut self, vehicle: &Vehicle, command: &VehicleCommand) -> Result<()> {
        tracing::debug!(vin = %vehicle.vin, command = command.identifier(), "sending command");
        let response = self.post(
            &format!("/api/1/vehicles/{}/command/{}", vehicle.id, command.endpoint()),
            &command.params(),
        )?;

        let accepted = response
            .get("result")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if accepted {
            Ok(())
        } else {
            let reason = response
                .get("reason")
                .and_then(Value::as_str)
                .filter(|r| !r.is_empty())
                .unwrap_or("no reason given");
            Err(TeslaError::CommandFailed {
                command: command.identifier().to_string(),
                reason: reason.to_string(),
            })
        }
    }
}
