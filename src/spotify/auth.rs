use std::fmt;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config,
    error::{ConfigError, ServiceError},
    types::Token,
};

/// Application credentials for the client credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "bearer")]
    token_type: String,
    #[serde(default = "one_hour")]
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

fn bearer() -> String {
    "Bearer".to_string()
}

fn one_hour() -> u64 {
    3600
}

/// Exchanges the application credentials for an access token.
///
/// Uses the OAuth 2.0 client credentials grant: the client id and secret are
/// sent as HTTP basic auth and no user interaction is involved. Tokens
/// obtained this way can read public and unlisted playlists only.
///
/// # Errors
///
/// - `ServiceError::Unauthorized` when the token endpoint rejects the
///   credentials (400/401)
/// - `ServiceError::Transport` for network failures and other statuses
/// - `ServiceError::Malformed` when the response is not a token
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token, ServiceError> {
    let res = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if status.is_success() {
        let json = res.json::<TokenResponse>().await?;
        return Ok(Token {
            access_token: json.access_token,
            token_type: json.token_type,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        });
    }

    let body = res.text().await.unwrap_or_default();
    Err(token_error(status, &body))
}

fn token_error(status: StatusCode, body: &str) -> ServiceError {
    let message = match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(err) => err.error_description.unwrap_or(err.error),
        Err(_) => status.canonical_reason().unwrap_or("token request failed").to_string(),
    };

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => ServiceError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        _ => ServiceError::Transport(format!("{}: {}", status, message)),
    }
}
