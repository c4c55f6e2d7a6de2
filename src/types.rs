use std::fmt;

use serde::Deserialize;
use tabled::Tabled;

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Opaque playlist identifier as used by the Spotify Web API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pointer to the next page of a paginated result.
///
/// For Spotify this is the absolute `next` URL of the previous page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tracks: Option<Paging<Option<PlaylistItem>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

/// A single entry of a playlist. `track` is null for removed or
/// region-restricted songs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// A batch of playlist entries plus the pointer to the following batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<ContinuationToken>,
}

impl From<Paging<Option<PlaylistItem>>> for TrackPage {
    fn from(page: Paging<Option<PlaylistItem>>) -> Self {
        TrackPage {
            // a null item is kept as an entry without a track
            items: page.items.into_iter().map(Option::unwrap_or_default).collect(),
            next: page.next.map(ContinuationToken::new),
        }
    }
}

/// How a ranked list is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Pie,
    List,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Pie => f.write_str("pie"),
            DisplayMode::List => f.write_str("list"),
        }
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub artist: String,
    pub songs: String,
}

#[derive(Tabled)]
pub struct ShareTableRow {
    pub artist: String,
    pub songs: u64,
    pub share: String,
    #[tabled(rename = "")]
    pub bar: String,
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
