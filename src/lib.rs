//! Walkman Playlist Assistant.
//!
//! Two independent engines over a music folder:
//! - [`playlist`]: scan a tree, read tags, write M3U8 playlists (one for the
//!   whole tree or one per subfolder).
//! - [`diff`]: compare two trees by relative path and copy what is missing.
//!
//! Both take their inputs as explicit request structs, report progress
//! through [`progress::Progress`] and honour a [`progress::CancelToken`], so a
//! front end only gathers inputs and renders results.

pub mod config;
pub mod diff;
pub mod error;
pub mod library;
pub mod metadata;
pub mod playlist;
pub mod progress;

pub use error::{Error, Result};
