//! # Spotify Integration Module
//!
//! The thin layer between sparcli and the Spotify Web API. It knows how to
//! obtain an access token and how to read a playlist page by page; it knows
//! nothing about artists, tallies or rendering.
//!
//! ```text
//! Fetcher (crate::fetch)
//!          ↓
//! PlaylistSource trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials)
//!     └── Playlist paging
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! The fetcher is generic over [`PlaylistSource`], so tests can drive it with
//! an in-memory source instead of the network.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials exchange
//! - `GET /playlists/{id}` - playlist metadata with the first items page
//! - `GET {next}` - following items pages

pub mod auth;
pub mod playlist;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{ConfigError, ServiceError},
    management::TokenManager,
    types::{ContinuationToken, PlaylistId, TrackPage},
};

use self::auth::Credentials;

/// Source of paginated playlist items.
pub trait PlaylistSource {
    /// Fetches playlist metadata and the first page of items.
    ///
    /// Returns `Ok(None)` when the service answered but reported no track
    /// collection for the playlist.
    fn first_page(
        &self,
        id: &PlaylistId,
    ) -> impl Future<Output = Result<Option<TrackPage>, ServiceError>> + Send;

    /// Fetches the page a previous page pointed to.
    fn next_page(
        &self,
        next: &ContinuationToken,
    ) -> impl Future<Output = Result<TrackPage, ServiceError>> + Send;
}

/// Spotify Web API client authenticated with the client credentials grant.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(
        credentials: Credentials,
        api_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            tokens: Mutex::new(TokenManager::new(credentials, token_url)),
        }
    }

    /// Builds a client from the environment (see [`crate::config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            Credentials::from_env()?,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        ))
    }

    /// Exchanges the credentials up front so that bad credentials surface
    /// before any playlist request.
    pub async fn authenticate(&self) -> Result<(), ServiceError> {
        self.access_token().await.map(|_| ())
    }

    async fn access_token(&self) -> Result<String, ServiceError> {
        let mut tokens = self.tokens.lock().await;
        tokens.get_valid_token(&self.http).await
    }
}

impl PlaylistSource for SpotifyClient {
    async fn first_page(&self, id: &PlaylistId) -> Result<Option<TrackPage>, ServiceError> {
        let token = self.access_token().await?;
        let res = playlist::get_playlist(&self.http, &self.api_url, &token, id).await?;
        Ok(res.tracks.map(TrackPage::from))
    }

    async fn next_page(&self, next: &ContinuationToken) -> Result<TrackPage, ServiceError> {
        let token = self.access_token().await?;
        let page = playlist::get_items_page(&self.http, &token, next.as_str()).await?;
        Ok(TrackPage::from(page))
    }
}
