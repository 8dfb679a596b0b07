//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to
//! 1 req/sec. The user-agent string comes from [`MetadataConfig`] so it is
//! set once at startup, not per call.

use super::{adapter, dto};
use crate::catalog::domain::{Artist, CatalogError, Recording, Release};
use crate::config::MetadataConfig;

/// Upper bound on recordings fetched per browse. Prolific artists can have
/// thousands; this matches the single-page maximum the API allows.
const RECORDING_BROWSE_LIMIT: u32 = 1000;

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client from the metadata service configuration
    pub fn new(config: &MetadataConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: config.base_url.clone(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search artists by name, best match first
    pub async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, CatalogError> {
        let url = format!(
            "{}/artist?query={}&fmt=json",
            self.base_url,
            urlencoding::encode(term)
        );

        let response: dto::ArtistSearchResponse = self.fetch(&url).await?;
        Ok(response.artists.into_iter().map(adapter::to_artist).collect())
    }

    /// Look up an artist by MusicBrainz ID
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError> {
        let url = format!("{}/artist/{}?fmt=json", self.base_url, artist_id);

        let response: dto::ArtistDto = self.fetch(&url).await?;
        Ok(adapter::to_artist(response))
    }

    /// Browse all recordings credited to an artist
    pub async fn browse_recordings(&self, artist_id: &str) -> Result<Vec<Recording>, CatalogError> {
        let url = format!(
            "{}/recording?artist={}&limit={}&fmt=json",
            self.base_url, artist_id, RECORDING_BROWSE_LIMIT
        );

        let response: dto::RecordingBrowseResponse = self.fetch(&url).await?;
        Ok(response
            .recordings
            .into_iter()
            .map(adapter::to_recording)
            .collect())
    }

    /// Browse all release groups credited to an artist
    pub async fn browse_release_groups(
        &self,
        artist_id: &str,
    ) -> Result<Vec<Release>, CatalogError> {
        let url = format!(
            "{}/release-group?artist={}&fmt=json",
            self.base_url, artist_id
        );

        let response: dto::ReleaseGroupBrowseResponse = self.fetch(&url).await?;
        Ok(response
            .release_groups
            .into_iter()
            .map(adapter::to_release)
            .collect())
    }

    /// Send a GET request and parse the JSON response
    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::Api(error.error));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
