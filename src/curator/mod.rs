//! # Curator
//!
//! Turns a track catalog and a mood description into a [`FinalPlaylist`].
//!
//! ```text
//! catalog ──► prompt::build_prompt ──► CompletionService::complete
//!                                            │ text          │ error
//!                                            ▼               │
//!                                 reconcile::reconcile       │
//!                                   │ Accepted  │ Rejected   │
//!                                   ▼           ▼            ▼
//!                               FinalPlaylist   fallback::fallback_playlist
//! ```
//!
//! Reconciliation parses the model output in two tiers that stay separate:
//!
//! 1. [`repair`] strips wrappers, balances brackets and drops trailing commas,
//!    then the text is parsed strictly and validated by
//!    [`reconcile::validate_schema`].
//! 2. When strict parsing fails, [`extract::extract_draft`] scans the text for
//!    scalar fields and track fragments with regular expressions.
//!
//! Whatever tier produced the draft, selections are ordered, cut to the track
//! budget and linked back to catalog ids by case-insensitive `(name, artist)`.
//!
//! Everything here except [`PlaylistAssembler::assemble`] is a pure function
//! of its inputs.
//!
//! [`FinalPlaylist`]: crate::types::FinalPlaylist

pub mod assembler;
pub mod extract;
pub mod fallback;
pub mod prompt;
pub mod reconcile;
pub mod repair;

pub use assembler::{
    AssembledPlaylist, CompletionService, FallbackReason, GenerationConfig, PlaylistAssembler,
    PlaylistRequest, PlaylistSource,
};
pub use fallback::fallback_playlist;
pub use prompt::build_prompt;
pub use reconcile::{Rejection, reconcile};
