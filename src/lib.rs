//! Mood Playlist Curator CLI Library
//!
//! This library turns the tracks of a Spotify playlist into a new "mood"
//! playlist. A generative model picks and orders the tracks; its answer is
//! repaired, validated and linked back to the source catalog, with a
//! deterministic fallback whenever the model cannot be used.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `curator` - Prompt building, response reconciliation and playlist assembly
//! - `error` - Error taxonomy shared by all layers
//! - `gemini` - Gemini completion service client
//! - `management` - Local track library and custom playlist persistence
//! - `spotify` - Spotify Web API client implementation
//! - `store` - Catalog source and playlist store interfaces
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodlist::curator::{PlaylistAssembler, PlaylistRequest};
//! use moodlist::gemini::GeminiClient;
//!
//! let assembler = PlaylistAssembler::new(GeminiClient::from_env()?);
//! let request = PlaylistRequest::new(&catalog, "rainy sunday", "Rainy Sunday Mix", 10);
//! let assembled = assembler.assemble(&request).await;
//! println!("{} tracks", assembled.playlist.tracks.len());
//! ```

pub mod cli;
pub mod config;
pub mod curator;
pub mod error;
pub mod gemini;
pub mod management;
pub mod spotify;
pub mod store;
pub mod types;
pub mod utils;

/// Result alias used by the CLI glue, where errors of different layers meet.
///
/// Library layers return [`error::Error`] (or a more specific error type);
/// anything that only needs to be reported to the user can be boxed into this.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational status line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Fetching {} tracks from the playlist...", limit);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
///
/// ```
/// success!("Stored {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with status 1.
///
/// Only the CLI layer uses this, for conditions where no playlist can be
/// produced at all (for example an unreachable catalog). Library code returns
/// errors instead.
///
/// ```
/// error!("Failed to fetch tracks: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
///
/// Used for recoverable degradation: fallback playlists, missing genres,
/// failed persistence of an otherwise usable playlist.
///
/// ```
/// warning!("AI features unavailable, using fallback mode");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
