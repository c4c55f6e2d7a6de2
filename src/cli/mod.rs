//! # CLI Module
//!
//! The presentation layer of sparcli. It turns a playlist reference and the
//! user's selections into a rendered ranking:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Core (crate::utils, crate::fetch, crate::tally)
//!     ↓
//! Spotify Integration (crate::spotify)
//! ```
//!
//! - [`artists`] - runs the whole pipeline and reports failures to the user
//! - [`analyze`] - the pipeline without rendering, generic over the source
//! - [`display`] - pie and list renditions of a ranked list
//!
//! Every error from the core arrives here typed; this module alone decides
//! how it is shown.

mod artists;
pub mod display;

pub use artists::{Analysis, analyze};
pub use artists::artists;
