//! # Gemini Integration Module
//!
//! Client for Google's Gemini `generateContent` endpoint, used as the
//! [`CompletionService`](crate::curator::CompletionService) behind playlist
//! curation.
//!
//! The client is deliberately thin: one prompt in, the concatenated text parts
//! of the first candidate out. It does not retry. Every failure is mapped to a
//! [`CompletionError`](crate::error::CompletionError) so the playlist
//! assembler can fall back immediately:
//!
//! | HTTP / condition            | Error              |
//! |-----------------------------|--------------------|
//! | client timeout              | `Timeout`          |
//! | 401, 403                    | `Unauthenticated`  |
//! | 429                         | `Quota`            |
//! | `promptFeedback.blockReason`| `Blocked`          |
//! | other non-2xx               | `Service`          |
//! | no text in the candidate    | `EmptyResponse`    |
//!
//! Answers cut off by `maxOutputTokens` are returned as they are; repairing
//! truncated JSON is the reconciler's job.

mod client;
pub mod models;

pub use client::GeminiClient;
