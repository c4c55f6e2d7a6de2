use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::{Error, FetchError, ServiceError},
    fetch::{self, Cancellation},
    info,
    spotify::{PlaylistSource, SpotifyClient},
    success,
    tally::{self, CountSelector, RankedArtistList},
    types::{DisplayMode, PlaylistId},
    utils, warning,
};

use super::display;

/// Runs the whole pipeline for one playlist: extract id, fetch, tally, rank
/// and render.
pub async fn artists(playlist: String, selector: CountSelector, mode: DisplayMode) {
    let client = match SpotifyClient::from_env() {
        Ok(c) => c,
        Err(e) => crate::error!(
            "{}\nSet it in the environment or in {}.",
            e,
            crate::config::env_path().display()
        ),
    };

    if let Err(e) = client.authenticate().await {
        report(Error::Service(e));
    }

    let cancel = Cancellation::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    if let Ok(id) = utils::extract_playlist_id(&playlist) {
        info!("Fetching playlist {}", id);
    }

    match analyze(&client, &playlist, selector, &cancel).await {
        Ok(analysis) => {
            success!(
                "Fetched {} tracks crediting {} artists",
                analysis.tracks,
                analysis.artists
            );
            if analysis.ranked.is_empty() {
                warning!("No artists found in this playlist.");
                return;
            }
            display::render(&analysis.ranked, mode);
        }
        Err(e) => report(e),
    }
}

/// Outcome of [`analyze`]: the ranking plus the totals it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub id: PlaylistId,
    /// Fetched entries, including those without a track.
    pub tracks: usize,
    /// Distinct credited artists before selection.
    pub artists: usize,
    pub ranked: RankedArtistList,
}

/// Fetches and ranks the artists of `playlist`. Prints nothing except the
/// progress spinner; the caller reports the totals.
pub async fn analyze<S: PlaylistSource>(
    source: &S,
    playlist: &str,
    selector: CountSelector,
    cancel: &Cancellation,
) -> Result<Analysis, Error> {
    let id = utils::extract_playlist_id(playlist)?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let items = fetch::fetch_all_tracks_with_cancel(source, &id, cancel).await;
    pb.finish_and_clear();
    let items = items?;

    let artist_tally = tally::tally(&items);
    Ok(Analysis {
        tracks: items.len(),
        artists: artist_tally.len(),
        ranked: tally::rank(&artist_tally, selector),
        id,
    })
}

fn report(err: Error) -> ! {
    match err {
        Error::Parse(_) => crate::error!("Invalid playlist URL."),
        Error::Fetch(FetchError::Inaccessible(msg)) => crate::error!(
            "Could not access playlist ({}).\nPlease make sure it is set to public or unlisted.",
            msg
        ),
        Error::Fetch(FetchError::Cancelled { fetched }) => {
            crate::error!("Cancelled after fetching {} tracks.", fetched)
        }
        Error::Service(ServiceError::Unauthorized { message, .. }) => crate::error!(
            "Spotify rejected the client credentials: {}\nCheck SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET.",
            message
        ),
        other => crate::error!("An error occurred: {}", other),
    }
}
