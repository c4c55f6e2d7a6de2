//! Configuration management for sparcli.
//!
//! Values are read from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`sparcli/.env`)
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads `.env` files into the process environment.
///
/// Missing files are skipped. Variables that are already set are never
/// overwritten, so the working directory file wins over the data directory
/// one and the real environment wins over both.
///
/// # Directory Structure
///
/// The data directory file lives at:
/// - Linux: `~/.local/share/sparcli/.env`
/// - macOS: `~/Library/Application Support/sparcli/.env`
/// - Windows: `%LOCALAPPDATA%/sparcli/.env`
pub fn load_env() -> Result<(), ConfigError> {
    load_file(PathBuf::from(".env"))?;
    load_file(env_path())
}

/// Path of the per-user `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sparcli/.env");
    path
}

fn load_file(path: PathBuf) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::Invalid {
        name: ".env",
        value: format!("{}: {}", path.display(), e),
    })
}

/// Returns the Spotify client id used for the client credentials exchange.
///
/// Reads `SPOTIFY_CLIENT_ID`, falling back to `SPOTIPY_CLIENT_ID` so that
/// existing spotipy `.env` files keep working.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_CLIENT_ID", "SPOTIPY_CLIENT_ID")
}

/// Returns the Spotify client secret.
///
/// Reads `SPOTIFY_CLIENT_SECRET`, falling back to `SPOTIPY_CLIENT_SECRET`.
/// The secret is never logged.
pub fn spotify_client_secret() -> Result<String, ConfigError> {
    required("SPOTIFY_CLIENT_SECRET", "SPOTIPY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

fn required(name: &'static str, legacy: &'static str) -> Result<String, ConfigError> {
    optional(name)
        .or_else(|| optional(legacy))
        .ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
