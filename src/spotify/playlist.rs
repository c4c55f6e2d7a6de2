use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::ServiceError,
    types::{Paging, PlaylistId, PlaylistItem, PlaylistResponse},
};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Retrieves a playlist's metadata together with its first page of items.
///
/// Uses Spotify's `/playlists/{id}` endpoint. The embedded `tracks` object is
/// a regular paging object whose `next` URL continues the listing.
///
/// # Errors
///
/// - `ServiceError::Inaccessible` for 400, 403 and 404 responses (malformed
///   id, private playlist, missing playlist)
/// - `ServiceError::Transport` for network failures and other statuses,
///   including 401 (a rejected access token) and 429 (rate limiting)
/// - `ServiceError::Malformed` when the body does not decode
pub async fn get_playlist(
    client: &Client,
    api_url: &str,
    token: &str,
    id: &PlaylistId,
) -> Result<PlaylistResponse, ServiceError> {
    let url = format!(
        "{uri}/playlists/{id}",
        uri = api_url.trim_end_matches('/'),
        id = id
    );

    debug!("GET {}", url);
    let response = client.get(&url).bearer_auth(token).send().await?;
    decode(response).await
}

/// Retrieves the page of playlist items behind a `next` URL.
pub async fn get_items_page(
    client: &Client,
    token: &str,
    next_url: &str,
) -> Result<Paging<Option<PlaylistItem>>, ServiceError> {
    debug!("GET {}", next_url);
    let response = client.get(next_url).bearer_auth(token).send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    match status {
        StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            ServiceError::Inaccessible {
                status: status.as_u16(),
                message,
            }
        }
        _ => ServiceError::Transport(format!("{}: {}", status, message)),
    }
}
