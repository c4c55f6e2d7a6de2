#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use sparcli::{
    error::ServiceError,
    fetch::Cancellation,
    spotify::PlaylistSource,
    types::{Artist, ContinuationToken, PlaylistId, PlaylistItem, Track, TrackPage},
};

// Helper function to create a playlist entry credited to the given artists
pub fn item(name: &str, artists: &[&str]) -> PlaylistItem {
    PlaylistItem {
        track: Some(Track {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| Artist {
                    name: a.to_string(),
                })
                .collect(),
        }),
    }
}

// Helper function to create an entry whose track is unavailable
pub fn missing() -> PlaylistItem {
    PlaylistItem { track: None }
}

pub fn page(items: Vec<PlaylistItem>, next: Option<&str>) -> TrackPage {
    TrackPage {
        items,
        next: next.map(ContinuationToken::new),
    }
}

pub fn numbered_items(count: usize, artist: &str) -> Vec<PlaylistItem> {
    (0..count)
        .map(|i| item(&format!("Song {}", i), &[artist]))
        .collect()
}

/// In-memory playlist source serving canned pages and counting requests.
pub struct FakeSource {
    first: Result<Option<TrackPage>, ServiceError>,
    pages: HashMap<String, Result<TrackPage, ServiceError>>,
    cancel_after_first: Option<Cancellation>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(first: TrackPage) -> Self {
        Self::with_first(Ok(Some(first)))
    }

    pub fn with_first(first: Result<Option<TrackPage>, ServiceError>) -> Self {
        Self {
            first,
            pages: HashMap::new(),
            cancel_after_first: None,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, token: &str, page: TrackPage) -> Self {
        self.pages.insert(token.to_string(), Ok(page));
        self
    }

    pub fn with_failing_page(mut self, token: &str, err: ServiceError) -> Self {
        self.pages.insert(token.to_string(), Err(err));
        self
    }

    pub fn cancelling_after_first(mut self, cancel: Cancellation) -> Self {
        self.cancel_after_first = Some(cancel);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PlaylistSource for FakeSource {
    async fn first_page(&self, id: &PlaylistId) -> Result<Option<TrackPage>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(id.to_string());
        if let Some(cancel) = &self.cancel_after_first {
            cancel.cancel();
        }
        self.first.clone()
    }

    async fn next_page(&self, next: &ContinuationToken) -> Result<TrackPage, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(next.as_str().to_string());
        self.pages.get(next.as_str()).cloned().unwrap_or_else(|| {
            Err(ServiceError::Transport(format!(
                "no page registered for {}",
                next.as_str()
            )))
        })
    }
}
