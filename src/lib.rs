//! Spotify Playlist Artist Ranking Library
//!
//! This library fetches the complete track list of a Spotify playlist,
//! counts how many songs each credited artist appears on, and ranks the
//! artists by that count. The command-line front end renders the ranking as
//! a pie-style share table or as a plain list.
//!
//! # Modules
//!
//! - `cli` - Command-line presentation layer
//! - `config` - Configuration management and environment variables
//! - `error` - Typed error taxonomy
//! - `fetch` - Pagination-aware playlist fetching with cancellation
//! - `management` - In-memory access token management
//! - `spotify` - Spotify Web API client implementation
//! - `tally` - Artist counting and ranked selection
//! - `types` - Data structures and type definitions
//! - `utils` - Input parsing and formatting helpers
//!
//! # Example
//!
//! ```
//! use sparcli::{fetch, spotify::SpotifyClient, tally, utils};
//!
//! #[tokio::main]
//! async fn main() -> sparcli::Result<()> {
//!     sparcli::config::load_env()?;
//!     let client = SpotifyClient::from_env()?;
//!     let id = utils::extract_playlist_id("https://open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n")?;
//!     let items = fetch::fetch_all_tracks(&client, &id).await?;
//!     let ranked = tally::tally(&items).rank(tally::CountSelector::All);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod management;
pub mod spotify;
pub mod tally;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints a status line prefixed with a blue bullet.
///
/// ```
/// info!("Fetching playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red error line to stderr and exits with status 1.
///
/// Only the binary and the presentation layer use this; library code
/// returns typed errors instead.
///
/// ```
/// error!("Invalid playlist URL.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a notice prefixed with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
