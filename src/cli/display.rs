use tabled::{
    Table,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    info,
    types::{ArtistTableRow, DisplayMode, ShareTableRow},
    utils,
};

const BAR_WIDTH: usize = 30;

pub fn render(ranked: &[(String, u64)], mode: DisplayMode) {
    match mode {
        DisplayMode::Pie => {
            info!(
                "Top {} Artists by Number of Songs (All Contributors)",
                ranked.len()
            );
            println!("{}", pie(ranked));
        }
        DisplayMode::List => println!("{}", list(ranked)),
    }
}

/// Text rendition of the artist pie chart: each artist's share of the
/// displayed songs.
pub fn pie(ranked: &[(String, u64)]) -> String {
    let total: u64 = ranked.iter().map(|(_, count)| count).sum();
    let max = ranked.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let rows: Vec<ShareTableRow> = ranked
        .iter()
        .map(|(artist, count)| ShareTableRow {
            artist: artist.clone(),
            songs: *count,
            share: utils::format_share(*count, total),
            bar: utils::share_bar(*count, max, BAR_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right());
    table.to_string()
}

pub fn list(ranked: &[(String, u64)]) -> String {
    let rows: Vec<ArtistTableRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, (artist, count))| ArtistTableRow {
            rank: i + 1,
            artist: artist.clone(),
            songs: format!("{} songs", count),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
