use std::{num::NonZeroUsize, sync::LazyLock};

use regex::Regex;

use crate::{
    error::{ParseError, SelectionError},
    tally::CountSelector,
    types::{DisplayMode, PlaylistId},
};

static PLAYLIST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([a-zA-Z0-9]+)").expect("valid playlist path regex"));

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z0-9]{22})").expect("valid bare id regex"));

/// Extracts a playlist id from a URL, share link or pasted id.
///
/// The segment following `playlist/` wins; otherwise the first run of 22
/// alphanumeric characters anywhere in the input is taken.
pub fn extract_playlist_id(input: &str) -> Result<PlaylistId, ParseError> {
    PLAYLIST_PATH
        .captures(input)
        .or_else(|| BARE_ID.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| PlaylistId::new(m.as_str()))
        .ok_or_else(|| ParseError::NotFound(input.to_string()))
}

/// Parses `all` or a positive integer into a [`CountSelector`].
///
/// Usable as a clap `value_parser`.
pub fn parse_count_selector(input: &str) -> Result<CountSelector, SelectionError> {
    let value = input.trim();
    if value.eq_ignore_ascii_case("all") {
        return Ok(CountSelector::All);
    }

    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::InvalidCount(input.to_string()));
    }

    // only overflow can fail here; such counts rank everything anyway
    let n = digits.parse::<usize>().unwrap_or(usize::MAX);
    NonZeroUsize::new(n)
        .map(CountSelector::Top)
        .ok_or_else(|| SelectionError::InvalidCount(input.to_string()))
}

/// Parses `pie` or `list` into a [`DisplayMode`].
///
/// Usable as a clap `value_parser`.
pub fn parse_display_mode(input: &str) -> Result<DisplayMode, SelectionError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "pie" => Ok(DisplayMode::Pie),
        "list" => Ok(DisplayMode::List),
        _ => Err(SelectionError::InvalidMode(input.to_string())),
    }
}

/// Share of `count` in `total` as a percentage, formatted like `%1.1f%%`.
pub fn format_share(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

/// Horizontal bar proportional to `count / max`, at most `width` cells.
pub fn share_bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = ((count as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
