//! Artist frequency aggregation and ranked selection.

use std::{collections::HashMap, num::NonZeroUsize};

use crate::types::PlaylistItem;

/// Song count per artist display name.
///
/// Entries keep the order in which each artist first appeared in the track
/// stream. That order is the tie-break for [`ArtistTally::rank`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

/// Which part of the ranking the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSelector {
    All,
    Top(NonZeroUsize),
}

/// Artists ordered by descending song count.
pub type RankedArtistList = Vec<(String, u64)>;

impl ArtistTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one song for `artist`.
    pub fn record(&mut self, artist: &str) {
        match self.index.get(artist) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(artist.to_string(), self.entries.len());
                self.entries.push((artist.to_string(), 1));
            }
        }
    }

    pub fn get(&self, artist: &str) -> Option<u64> {
        self.index.get(artist).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct artists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of artist attributions.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Ranks artists by descending count.
    ///
    /// Equal counts keep first-appearance order. `Top(n)` with `n` at or
    /// above the number of artists returns the full ranking.
    pub fn rank(&self, selector: CountSelector) -> RankedArtistList {
        let mut ranked = self.entries.clone();
        // sort_by is stable, which preserves first-appearance order on ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        if let CountSelector::Top(n) = selector {
            ranked.truncate(n.get());
        }
        ranked
    }
}

/// Tallies the artists credited on each track.
///
/// Entries without a track and tracks without artists contribute nothing.
pub fn tally<'a, I>(items: I) -> ArtistTally
where
    I: IntoIterator<Item = &'a PlaylistItem>,
{
    let mut tally = ArtistTally::new();
    for track in items.into_iter().filter_map(|item| item.track.as_ref()) {
        for artist in &track.artists {
            tally.record(&artist.name);
        }
    }
    tally
}

/// Ranks a tally; shorthand for [`ArtistTally::rank`].
pub fn rank(tally: &ArtistTally, selector: CountSelector) -> RankedArtistList {
    tally.rank(selector)
}
