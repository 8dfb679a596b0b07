//! Catalog enrichment pipeline - orchestrates the artist-detail flow
//!
//! This is the high-level API the rest of the application renders from:
//! 1. Resolve the artist from the metadata catalog
//! 2. Browse raw recordings and release groups
//! 3. Deduplicate and sort the recordings by title
//! 4. Fan out lyrics lookups under the concurrency cap
//! 5. Compute aggregate lyrics statistics
//! 6. Attach the derived cover image reference to each release
//!
//! Every invocation is stateless start-to-finish and produces a fresh
//! [`ArtistCatalog`] snapshot.

use crate::config::Config;

use super::domain::{Artist, ArtistCatalog, CatalogError, cover_image_ref};
use super::lyrics::LyricsClient;
use super::musicbrainz::MusicBrainzClient;
use super::traits::{LyricsApi, MetadataApi};
use super::{dedup, engine, stats};

/// Service producing enriched artist catalogs.
pub struct CatalogService<M = MusicBrainzClient, L = LyricsClient> {
    metadata: M,
    lyrics: L,
    max_concurrent_lookups: usize,
}

impl CatalogService {
    /// Create a service with the real clients, configured once at startup.
    pub fn new(config: &Config) -> Self {
        Self {
            metadata: MusicBrainzClient::new(&config.metadata),
            lyrics: LyricsClient::new(&config.lyrics),
            max_concurrent_lookups: config.enrichment.max_concurrent_lookups,
        }
    }
}

impl<M: MetadataApi, L: LyricsApi> CatalogService<M, L> {
    /// Create a service over arbitrary client implementations.
    pub fn with_clients(metadata: M, lyrics: L, max_concurrent_lookups: usize) -> Self {
        Self {
            metadata,
            lyrics,
            max_concurrent_lookups,
        }
    }

    /// Build the enriched catalog for one artist.
    ///
    /// [`CatalogError::ArtistNotFound`] is the single failure mode: it
    /// covers both an unknown id and a metadata service that cannot be
    /// reached at all. Once the artist resolves, a failing recording or
    /// release browse degrades to an empty list so the page still renders
    /// with whatever subset of data resolved.
    pub async fn enrich_artist(&self, artist_id: &str) -> Result<ArtistCatalog, CatalogError> {
        let artist = match self.metadata.get_artist(artist_id).await {
            Ok(artist) => artist,
            Err(CatalogError::NotFound) => return Err(CatalogError::ArtistNotFound),
            Err(e) => {
                tracing::warn!("artist lookup failed for {}: {}", artist_id, e);
                return Err(CatalogError::ArtistNotFound);
            }
        };

        let raw_recordings = match self.metadata.browse_recordings(&artist.id).await {
            Ok(recordings) => recordings,
            Err(e) => {
                tracing::warn!("recording browse failed for {}: {}", artist.id, e);
                Vec::new()
            }
        };

        let mut releases = match self.metadata.browse_release_groups(&artist.id).await {
            Ok(releases) => releases,
            Err(e) => {
                tracing::warn!("release-group browse failed for {}: {}", artist.id, e);
                Vec::new()
            }
        };

        let mut recordings = dedup::dedup_and_sort(raw_recordings);

        let titles: Vec<String> = recordings.iter().map(|r| r.title.clone()).collect();
        let lyrics = engine::fetch_lyrics(
            &self.lyrics,
            &artist.name,
            &titles,
            self.max_concurrent_lookups,
        )
        .await;
        for (recording, lyrics) in recordings.iter_mut().zip(lyrics) {
            recording.lyrics = lyrics;
        }

        let stats = stats::aggregate(&recordings);

        for release in &mut releases {
            release.cover_image = cover_image_ref(&release.id);
        }

        Ok(ArtistCatalog {
            artist,
            recordings,
            releases,
            stats,
        })
    }

    /// Search artists by name.
    ///
    /// Upstream failure is an empty result, not an error - the search page
    /// distinguishes "no term" from "no matches" a layer above this.
    pub async fn search_artists(&self, term: &str) -> Vec<Artist> {
        match self.metadata.search_artists(term).await {
            Ok(artists) => artists,
            Err(e) => {
                tracing::warn!("artist search failed for {:?}: {}", term, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{Recording, Release};
    use crate::catalog::traits::mocks::{MockLyrics, MockMetadata};

    fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            sort_name: None,
            disambiguation: None,
        }
    }

    fn rec(title: &str) -> Recording {
        Recording {
            title: title.to_string(),
            duration_ms: Some(180_000),
            lyrics: None,
        }
    }

    fn release(id: &str, title: &str) -> Release {
        Release {
            id: id.to_string(),
            title: title.to_string(),
            primary_type: Some("Album".to_string()),
            first_release_date: None,
            cover_image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_unknown_artist_is_not_found() {
        let service =
            CatalogService::with_clients(MockMetadata::not_found(), MockLyrics::empty(), 10);

        let result = service.enrich_artist("bad-id").await;

        assert!(matches!(result, Err(CatalogError::ArtistNotFound)));
    }

    #[tokio::test]
    async fn test_metadata_transport_error_is_not_found() {
        let mut metadata = MockMetadata::not_found();
        metadata.artist_error = Some(CatalogError::Network("connection refused".to_string()));
        let service = CatalogService::with_clients(metadata, MockLyrics::empty(), 10);

        let result = service.enrich_artist("art-1").await;

        assert!(matches!(result, Err(CatalogError::ArtistNotFound)));
    }

    #[tokio::test]
    async fn test_full_success_with_partial_lyrics() {
        let metadata = MockMetadata::with_catalog(
            artist("art-1", "Queen"),
            vec![rec("Charlie"), rec("Alpha"), rec("Bravo")],
            vec![release("rg-1", "First Album")],
        );
        // 10 and 20 words; "Bravo" has no lyrics on record
        let lyrics = MockLyrics::with_lyrics(&[
            ("Alpha", "a b c d e f g h i j"),
            ("Charlie", "a b c d e f g h i j k l m n o p q r s t"),
        ]);
        let service = CatalogService::with_clients(metadata, lyrics, 10);

        let catalog = service.enrich_artist("art-1").await.unwrap();

        // sorted ascending by title
        let titles: Vec<_> = catalog.recordings.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);

        // lyrics attached to the right recording
        assert_eq!(catalog.recordings[0].lyrics.as_ref().unwrap().word_count, 10);
        assert!(catalog.recordings[1].lyrics.is_none());
        assert_eq!(catalog.recordings[2].lyrics.as_ref().unwrap().word_count, 20);

        assert_eq!(catalog.stats.recordings_with_lyrics, 2);
        assert_eq!(catalog.stats.avg_words, 15.0);

        assert_eq!(catalog.releases[0].cover_image, "/cover/rg-1");
    }

    #[tokio::test]
    async fn test_duplicate_titles_collapse_before_enrichment() {
        let metadata = MockMetadata::with_catalog(
            artist("art-1", "Queen"),
            vec![rec("Same"), rec("Same"), rec("Other")],
            vec![],
        );
        let service =
            CatalogService::with_clients(metadata, MockLyrics::with_lyrics(&[("Same", "x y")]), 10);

        let catalog = service.enrich_artist("art-1").await.unwrap();

        assert_eq!(catalog.recordings.len(), 2);
        assert!(catalog.stats.recordings_with_lyrics <= catalog.recordings.len());
    }

    #[tokio::test]
    async fn test_recording_browse_failure_degrades_to_empty() {
        let mut metadata = MockMetadata::with_catalog(
            artist("art-1", "Queen"),
            vec![rec("Never Seen")],
            vec![release("rg-1", "Still Here")],
        );
        metadata.recordings_error = Some(CatalogError::Network("timeout".to_string()));
        let service = CatalogService::with_clients(metadata, MockLyrics::empty(), 10);

        let catalog = service.enrich_artist("art-1").await.unwrap();

        assert!(catalog.recordings.is_empty());
        assert_eq!(catalog.releases.len(), 1);
        assert_eq!(catalog.stats.recordings_with_lyrics, 0);
        assert_eq!(catalog.stats.avg_words, 0.0);
    }

    #[tokio::test]
    async fn test_release_browse_failure_degrades_to_empty() {
        let mut metadata =
            MockMetadata::with_catalog(artist("art-1", "Queen"), vec![rec("Track")], vec![]);
        metadata.releases_error = Some(CatalogError::Api("boom".to_string()));
        let service = CatalogService::with_clients(metadata, MockLyrics::empty(), 10);

        let catalog = service.enrich_artist("art-1").await.unwrap();

        assert!(catalog.releases.is_empty());
        assert_eq!(catalog.recordings.len(), 1);
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let metadata =
            MockMetadata::with_catalog(artist("art-1", "Queen"), vec![], vec![]);
        let service = CatalogService::with_clients(metadata, MockLyrics::empty(), 10);

        let artists = service.search_artists("queen").await;

        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Queen");
    }

    #[tokio::test]
    async fn test_search_failure_is_empty_sequence() {
        let mut metadata = MockMetadata::not_found();
        metadata.search_error = Some(CatalogError::Network("dns".to_string()));
        let service = CatalogService::with_clients(metadata, MockLyrics::empty(), 10);

        let artists = service.search_artists("queen").await;

        assert!(artists.is_empty());
    }
}
