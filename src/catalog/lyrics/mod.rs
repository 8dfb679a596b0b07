//! lyrics.ovh integration
//!
//! Resolves song lyrics by (artist name, track title). Misses are the
//! common case - plenty of tracks have no lyrics on record - so callers
//! treat every failure as "no lyrics", never as a pipeline error.

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_lyrics;
pub use client::LyricsClient;
