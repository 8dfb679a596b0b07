//! MusicBrainz API integration
//!
//! Resolves artists (search and direct lookup), recording browses, and
//! release-group browses. Release groups are used rather than releases
//! because they combine the CD/download/vinyl editions of an album.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_artist, to_recording, to_release};
pub use client::MusicBrainzClient;
