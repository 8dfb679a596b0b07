//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::coverart::CoverArtClient;
use super::domain::{Artist, CatalogError, Lyrics, Recording, Release};
use super::lyrics::LyricsClient;
use super::musicbrainz::MusicBrainzClient;

/// Trait for the metadata catalog (MusicBrainz).
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Search artists by name, best match first.
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, CatalogError>;

    /// Look up an artist by its id.
    async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError>;

    /// Browse all recordings credited to an artist.
    async fn browse_recordings(&self, artist_id: &str) -> Result<Vec<Recording>, CatalogError>;

    /// Browse all release groups credited to an artist.
    async fn browse_release_groups(&self, artist_id: &str) -> Result<Vec<Release>, CatalogError>;
}

/// Trait for the lyrics lookup service.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    /// Look up lyrics for an (artist name, track title) pair.
    async fn lookup(&self, artist_name: &str, title: &str) -> Result<Lyrics, CatalogError>;
}

/// Trait for the cover art archive.
#[async_trait]
pub trait CoverArtApi: Send + Sync {
    /// Resolve the front cover URL for a release group.
    async fn front_cover_url(&self, release_group_id: &str) -> Result<String, CatalogError>;
}

// Implement traits for real clients

#[async_trait]
impl MetadataApi for MusicBrainzClient {
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, CatalogError> {
        self.search_artists(term).await
    }

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError> {
        self.get_artist(artist_id).await
    }

    async fn browse_recordings(&self, artist_id: &str) -> Result<Vec<Recording>, CatalogError> {
        self.browse_recordings(artist_id).await
    }

    async fn browse_release_groups(&self, artist_id: &str) -> Result<Vec<Release>, CatalogError> {
        self.browse_release_groups(artist_id).await
    }
}

#[async_trait]
impl LyricsApi for LyricsClient {
    async fn lookup(&self, artist_name: &str, title: &str) -> Result<Lyrics, CatalogError> {
        self.lookup(artist_name, title).await
    }
}

#[async_trait]
impl CoverArtApi for CoverArtClient {
    async fn front_cover_url(&self, release_group_id: &str) -> Result<String, CatalogError> {
        self.front_cover_url(release_group_id).await
    }
}
