//! Cover Art Archive integration
//!
//! Resolves release-group artwork from coverartarchive.org. Resolution is
//! deferred to request time (the catalog pages only embed the derived
//! `/cover/<id>` reference) because the archive is slow; a missing or
//! unapproved cover falls back to a placeholder image.

pub mod dto;
mod client;

pub use client::{CoverArtClient, PLACEHOLDER_IMAGE};
