//! # CLI Module
//!
//! User-facing commands of moodlist. Each command loads what it needs from
//! Spotify or the local stores, prints progress with a spinner and renders
//! its result as a table.
//!
//! ## Commands
//!
//! - [`list_playlists`] - the user's Spotify playlists
//! - [`fetch_tracks`] - fetch a playlist's tracks into the local library
//! - [`library`] - browse the local track library
//! - [`generate`] - curate a mood playlist, store it and optionally publish it
//! - [`history`] - previously generated playlists
//! - [`stats`] - popularity and genre summary of generated playlists
//! - [`check`] - test the connection to the completion service
//!
//! ## Error Handling
//!
//! Commands print and return nothing. Conditions that leave nothing to show,
//! such as an unreachable catalog, end the process through [`error!`].
//! Everything the curation flow can recover from (an unavailable or unusable
//! model, a failed save) is reported with [`warning!`] and the command carries
//! on with what it has.
//!
//! [`error!`]: crate::error!
//! [`warning!`]: crate::warning!

mod check;
mod generate;
mod history;
mod library;
mod playlists;
mod stats;
mod tracks;

pub use check::check;
pub use generate::{CatalogSource, GenerateArgs, generate};
pub use history::history;
pub use library::library;
pub use playlists::list_playlists;
pub use stats::stats;
pub use tracks::{MAX_TRACKS, fetch_tracks};

use crate::{error, spotify::SpotifyCatalog};

async fn connect_spotify() -> SpotifyCatalog {
    match SpotifyCatalog::connect().await {
        Ok(c) => c,
        Err(e) => error!(
            "Failed to load a Spotify token. Set SPOTIFY_ACCESS_TOKEN in your .env file.\n Error: {}",
            e
        ),
    }
}
