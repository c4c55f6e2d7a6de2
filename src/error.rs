//! Error types shared by the library and the command-line front end.
//!
//! Every failure the core can produce is one of the typed enums below. The
//! core never prints or swallows an error; it hands it back to the caller,
//! which decides how to present it.

use thiserror::Error;

/// A convenient Result type alias for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// No playlist identifier could be extracted from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no playlist id found in {0:?}")]
    NotFound(String),
}

/// Failures of the pagination-aware playlist fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The playlist does not exist, is private, or has no track collection.
    #[error("playlist is not accessible: {0}")]
    Inaccessible(String),

    /// Network or service-level failure unrelated to the playlist itself.
    #[error("transport error: {0}")]
    Transport(String),

    /// The caller cancelled between two page requests.
    #[error("fetch cancelled after {fetched} tracks")]
    Cancelled { fetched: usize },

    /// The service answered with something that could not be understood.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Invalid user selections for the ranked view or its presentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid count {0:?}: enter a positive number or 'all'")]
    InvalidCount(String),

    #[error("invalid display mode {0:?}: choose 'pie' or 'list'")]
    InvalidMode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Errors reported by a [`crate::spotify::PlaylistSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Not found, forbidden, or a rejected playlist id.
    #[error("{status}: {message}")]
    Inaccessible { status: u16, message: String },

    /// The token endpoint rejected the client credentials.
    #[error("credentials rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Malformed(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

impl From<ServiceError> for FetchError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Inaccessible { .. } => FetchError::Inaccessible(err.to_string()),
            ServiceError::Unauthorized { .. } => FetchError::Transport(err.to_string()),
            ServiceError::Transport(msg) => FetchError::Transport(msg),
            ServiceError::Malformed(msg) => FetchError::Unexpected(msg),
        }
    }
}

/// Crate-wide error wrapping every typed failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Anything not covered above, with the original detail preserved.
    #[error("an unexpected error occurred: {0}")]
    Unexpected(String),
}
