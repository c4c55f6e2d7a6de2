use chrono::Utc;
use log::debug;
use reqwest::Client;

use crate::{
    error::ServiceError,
    spotify::auth::{Credentials, request_token},
    types::Token,
};

/// Seconds before expiry at which a token is considered stale.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Holds the current access token in memory and re-exchanges it when stale.
///
/// Nothing is written to disk; every process starts with a fresh exchange.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        TokenManager {
            credentials,
            token_url: token_url.into(),
            token: None,
        }
    }

    pub async fn get_valid_token(&mut self, client: &Client) -> Result<String, ServiceError> {
        match &self.token {
            Some(token) if !is_expired(token, now()) => Ok(token.access_token.clone()),
            _ => {
                debug!("Requesting new access token from {}", self.token_url);
                let token = request_token(client, &self.token_url, &self.credentials).await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_BUFFER_SECS >= token.obtained_at + token.expires_in
}
