//! OAuth 2 authorization-code login with PKCE.
//!
//! The user signs in through a browser; the final redirect lands on a
//! page that does not exist, so the user pastes that URL back and the
//! authorization code is read from its query string.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::error::{Result, TeslaError};

/// Public client id of the Owner API.
pub const CLIENT_ID: &str = "ownerapi";

/// Redirect target; the page 404s, the user copies its URL.
pub const REDIRECT_URI: &str = "https://auth.tesla.com/void/callback";

pub const SCOPE: &str = "openid email offline_access";

/// PKCE verifier/challenge pair plus the anti-forgery `state`.
#[derive(Debug, Clone)]
pub struct Pkce {
    pub verifier: String,
    pub challenge: String,
    pub state: String,
}

impl Pkce {
    /// Generate a fresh random verifier and state.
    pub fn generate() -> Self {
        let mut pkce = Self::from_verifier(&random_token(64));
        pkce.state = random_token(16);
        pkce
    }

    /// Derive the S256 challenge for a known verifier.
    pub fn from_verifier(verifier: &str) -> Self {
        let digest = Sha256::digest(verifier.as_bytes());
        Self {
            verifier: verifier.to_string(),
            challenge: URL_SAFE_NO_PAD.encode(digest),
            state: String::new(),
        }
    }
}

fn random_token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut token = URL_SAFE_NO_PAD.encode(bytes);
    token.truncate(len);
    token
}

/// Build the browser sign-in URL.
pub fn authorize_url(auth_base: &str, email: &str, pkce: &Pkce) -> Result<Url> {
    let mut url = endpoint(auth_base, "oauth2/v3/authorize")?;
    url.query_pairs_mut()
        .append_pair("client_id", CLIENT_ID)
        .append_pair("code_challenge", &pkce.challenge)
        .append_pair("code_challenge_method", "S256")
        .append_pair("redirect_uri", REDIRECT_URI)
        .append_pair("response_type", "code")
        .append_pair("scope", SCOPE)
        .append_pair("state", &pkce.state)
        .append_pair("login_hint", email);
    Ok(url)
}

/// Token endpoint URL.
pub fn token_url(auth_base: &str) -> Result<Url> {
    endpoint(auth_base, "oauth2/v3/token")
}

fn endpoint(base: &str, path: &str) -> Result<Url> {
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&base)
        .and_then(|u| u.join(path))
        .map_err(|e| TeslaError::Auth {
            message: format!("bad auth server URL '{}': {}", base, e),
        })
}

/// Extract the authorization code from a pasted callback URL.
pub fn parse_callback(callback: &str, expected_state: &str) -> Result<String> {
    let url = Url::parse(callback.trim()).map_err(|e| TeslaError::InvalidCallback {
        message: e.to_string(),
    })?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(TeslaError::Auth { message: error });
    }
    if state.as_deref() != Some(expected_state) {
        return Err(TeslaError::InvalidCallback {
            message: "state does not match the login request".to_string(),
        });
    }
    code.filter(|c| !c.is_empty())
        .ok_or_else(|| TeslaError::InvalidCallback {
            message: "no authorization code in URL".to_string(),
        })
}

/// Response of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_matches_rfc7636_example() {
        let pkce = Pkce::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        assert_eq!(pkce.challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn generated_values_are_url_safe_and_distinct() {
        let a = Pkce::generate();
        let b = Pkce::generate();
        assert_eq!(a.verifier.len(), 64);
        assert_eq!(a.state.len(), 16);
        assert_ne!(a.verifier, b.verifier);
        assert!(a
            .verifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn authorize_url_carries_pkce_and_login_hint() {
        let mut pkce = Pkce::from_verifier("verifier");
        pkce.state = "xyz".into();
        let url = authorize_url("https://auth.tesla.com", "me@example.com", &pkce).unwrap();

        assert_eq!(url.path(), "/oauth2/v3/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("client_id".into(), "ownerapi".into())));
        assert!(pairs.contains(&("code_challenge".into(), pkce.challenge.clone())));
        assert!(pairs.contains(&("code_challenge_method".into(), "S256".into())));
        assert!(pairs.contains(&("state".into(), "xyz".into())));
        assert!(pairs.contains(&("login_hint".into(), "me@example.com".into())));
    }

    #[test]
    fn token_url_respects_base_path() {
        let url = token_url("http://127.0.0.1:4000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4000/oauth2/v3/token");
    }

    #[test]
    fn callback_yields_code() {
        let code = parse_callback(
            "https://auth.tesla.com/void/callback?code=abc123&state=xyz&issuer=x",
            "xyz",
        )
        .unwrap();
        assert_eq!(code, "abc123");
    }

    #[test]
    fn callback_with_wrong_state_is_rejected() {
        let err =
            parse_callback("https://auth.tesla.com/void/callback?code=abc&state=evil", "xyz")
                .unwrap_err();
        assert!(matches!(err, TeslaError::InvalidCallback { .. }));
    }

    #[test]
    fn callback_without_code_is_rejected() {
        let err = parse_callback("https://auth.tesla.com/void/callback?state=xyz", "xyz")
            .unwrap_err();
        assert!(err.to_string().contains("no authorization code"));
    }

    #[test]
    fn callback_with_error_is_auth_failure() {
        let err = parse_callback(
            "https://auth.tesla.com/void/callback?error=login_cancelled&state=xyz",
            "xyz",
        )
        .unwrap_err();
        assert!(matches!(err, TeslaError::Auth { .. }));
    }

    #[test]
    fn garbage_callback_is_rejected() {
        let err = parse_callback("not a url", "xyz").unwrap_err();
        assert!(matches!(err, TeslaError::InvalidCallback { .. }));
    }
}
