//! Pagination-aware playlist fetching.
//!
//! Pages are requested strictly one after another: the next request is only
//! issued once the previous page has arrived and told us where to continue.

use log::debug;
use tokio::sync::watch;

use crate::{
    error::FetchError,
    spotify::PlaylistSource,
    types::{PlaylistId, PlaylistItem},
};

/// Cooperative cancellation for a running fetch.
///
/// The flag is only looked at between page requests, so a page that is
/// already in flight always completes.
#[derive(Clone, Debug)]
pub struct Cancellation {
    tx: watch::Sender<bool>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Retrieves every item of a playlist, following `next` pointers until the
/// terminal page.
///
/// A playlist without items yields an empty vector; that is a success, not a
/// failure. Errors are never retried here.
pub async fn fetch_all_tracks<S: PlaylistSource>(
    source: &S,
    id: &PlaylistId,
) -> Result<Vec<PlaylistItem>, FetchError> {
    fetch_all_tracks_with_cancel(source, id, &Cancellation::new()).await
}

/// Same as [`fetch_all_tracks`], but stops at the next page boundary once
/// `cancel` has been triggered.
pub async fn fetch_all_tracks_with_cancel<S: PlaylistSource>(
    source: &S,
    id: &PlaylistId,
    cancel: &Cancellation,
) -> Result<Vec<PlaylistItem>, FetchError> {
    let first = source
        .first_page(id)
        .await?
        .ok_or_else(|| FetchError::Inaccessible(format!("playlist {} has no track collection", id)))?;

    let mut items = first.items;
    let mut next = first.next;
    let mut pages = 1;

    while let Some(token) = next {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled {
                fetched: items.len(),
            });
        }

        let page = source.next_page(&token).await?;
        pages += 1;
        items.extend(page.items);
        next = page.next;
    }

    debug!(
        "Fetched {} items in {} page(s) for playlist {}",
        items.len(),
        pages,
        id
    );
    Ok(items)
}
