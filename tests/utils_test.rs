use std::num::NonZeroUsize;

use sparcli::error::{ParseError, SelectionError};
use sparcli::tally::CountSelector;
use sparcli::types::DisplayMode;
use sparcli::utils::*;

const ID: &str = "3cEYpjA9oz9GiPac4AsH4n";

#[test]
fn test_extract_playlist_id_from_share_link() {
    let id = extract_playlist_id("open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n?si=x").unwrap();
    assert_eq!(id.as_str(), ID);

    let id =
        extract_playlist_id("https://open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n").unwrap();
    assert_eq!(id.as_str(), ID);
}

#[test]
fn test_extract_playlist_id_from_bare_id() {
    let id = extract_playlist_id(ID).unwrap();
    assert_eq!(id.as_str(), ID);

    // surrounding whitespace from a paste
    let id = extract_playlist_id("  3cEYpjA9oz9GiPac4AsH4n\n").unwrap();
    assert_eq!(id.as_str(), ID);
}

#[test]
fn test_extract_playlist_id_from_uri_uses_fallback() {
    let id = extract_playlist_id("spotify:playlist:3cEYpjA9oz9GiPac4AsH4n").unwrap();
    assert_eq!(id.as_str(), ID);
}

#[test]
fn test_extract_playlist_id_prefers_path_segment() {
    // the path segment is shorter than 22 characters but still wins
    let id = extract_playlist_id(
        "https://example.com/playlist/short?ref=AAAAAAAAAAAAAAAAAAAAAAAAAA",
    )
    .unwrap();
    assert_eq!(id.as_str(), "short");
}

#[test]
fn test_extract_playlist_id_fallback_takes_first_22_characters() {
    let id = extract_playlist_id("abcdefghijklmnopqrstuvwxyz").unwrap();
    assert_eq!(id.as_str(), "abcdefghijklmnopqrstuv");
}

#[test]
fn test_extract_playlist_id_not_found() {
    assert_eq!(
        extract_playlist_id("not a playlist link"),
        Err(ParseError::NotFound("not a playlist link".to_string()))
    );
    assert!(extract_playlist_id("").is_err());
    // 21 characters is one short of a bare id
    assert!(extract_playlist_id("3cEYpjA9oz9GiPac4AsH4").is_err());
}

#[test]
fn test_parse_count_selector_all() {
    assert_eq!(parse_count_selector("all"), Ok(CountSelector::All));
    assert_eq!(parse_count_selector("ALL"), Ok(CountSelector::All));
    assert_eq!(parse_count_selector(" All "), Ok(CountSelector::All));
}

#[test]
fn test_parse_count_selector_positive_numbers() {
    assert_eq!(
        parse_count_selector("10"),
        Ok(CountSelector::Top(NonZeroUsize::new(10).unwrap()))
    );
    assert_eq!(
        parse_count_selector(" 3 "),
        Ok(CountSelector::Top(NonZeroUsize::new(3).unwrap()))
    );
    assert_eq!(
        parse_count_selector("+7"),
        Ok(CountSelector::Top(NonZeroUsize::new(7).unwrap()))
    );
}

#[test]
fn test_parse_count_selector_rejects_non_positive() {
    assert_eq!(
        parse_count_selector("0"),
        Err(SelectionError::InvalidCount("0".to_string()))
    );
    assert_eq!(
        parse_count_selector("-5"),
        Err(SelectionError::InvalidCount("-5".to_string()))
    );
}

#[test]
fn test_parse_count_selector_huge_numbers_clamp() {
    let all_of_them = Ok(CountSelector::Top(NonZeroUsize::MAX));
    assert_eq!(parse_count_selector("99999999999999999999"), all_of_them);
    assert_eq!(parse_count_selector("+99999999999999999999999"), all_of_them);
    assert_eq!(
        parse_count_selector("0007"),
        Ok(CountSelector::Top(NonZeroUsize::new(7).unwrap()))
    );
    assert_eq!(
        parse_count_selector("000"),
        Err(SelectionError::InvalidCount("000".to_string()))
    );
}

#[test]
fn test_parse_count_selector_rejects_garbage() {
    for input in ["", "ten", "2.5", "5 artists", "al", "+", "+-3", "1e3", "0x10"] {
        assert!(
            matches!(
                parse_count_selector(input),
                Err(SelectionError::InvalidCount(_))
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_display_mode() {
    assert_eq!(parse_display_mode("pie"), Ok(DisplayMode::Pie));
    assert_eq!(parse_display_mode("List"), Ok(DisplayMode::List));
    assert_eq!(
        parse_display_mode("bar"),
        Err(SelectionError::InvalidMode("bar".to_string()))
    );
    assert!(parse_display_mode("").is_err());
}

#[test]
fn test_format_share() {
    assert_eq!(format_share(1, 3), "33.3%");
    assert_eq!(format_share(2, 3), "66.7%");
    assert_eq!(format_share(5, 5), "100.0%");
    assert_eq!(format_share(0, 0), "0.0%");
}

#[test]
fn test_share_bar() {
    assert_eq!(share_bar(10, 10, 30).chars().count(), 30);
    assert_eq!(share_bar(5, 10, 30).chars().count(), 15);
    // tiny shares stay visible
    assert_eq!(share_bar(1, 1000, 30).chars().count(), 1);
    assert_eq!(share_bar(0, 0, 30), "");
}
