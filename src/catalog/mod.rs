//! Catalog enrichment module - builds an artist's aggregated catalog view
//! from external metadata and lyrics services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`musicbrainz/dto.rs`, `lyrics/dto.rs`, `coverart/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Dedup / Engine / Stats** - the pure pipeline stages
//! - **Service** - High-level orchestration of the enrichment flow
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use artistics::catalog::CatalogService;
//!
//! let config = config::load();
//! let service = CatalogService::new(&config);
//!
//! let catalog = service.enrich_artist("artist-mbid").await?;
//! println!("{} recordings, {:.1} avg words",
//!     catalog.recordings.len(), catalog.stats.avg_words);
//! ```

pub mod domain;
pub mod text;
pub mod dedup;
pub mod stats;
pub mod engine;
pub mod traits;
pub mod musicbrainz;
pub mod lyrics;
pub mod coverart;
pub mod service;

pub use domain::{
    Artist, ArtistCatalog, CatalogError, Lyrics, LyricsStats, Recording, Release,
    cover_image_ref, format_duration,
};
pub use coverart::{CoverArtClient, PLACEHOLDER_IMAGE};
pub use service::CatalogService;
