//! lyrics.ovh HTTP client
//!
//! Looks up lyrics for one (artist name, track title) pair per request.
//! No API key required. Artist and title travel as URL path segments, so
//! both are percent-encoded in full - a title like "AC/DC" would otherwise
//! change the path shape.

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, Lyrics};
use crate::config::LyricsConfig;

/// lyrics.ovh API client
pub struct LyricsClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl LyricsClient {
    /// Create a new client from the lyrics service configuration
    pub fn new(config: &LyricsConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(1),
        }
    }

    /// Look up lyrics for a track. Returns [`CatalogError::NotFound`] when
    /// the service has no lyrics for it; timeouts surface as network errors.
    pub async fn lookup(&self, artist_name: &str, title: &str) -> Result<Lyrics, CatalogError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(artist_name),
            urlencoding::encode(title)
        );

        let response = self
            .http_client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::LyricsResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        match body.lyrics {
            Some(raw) => Ok(adapter::to_lyrics(&raw)),
            // Success status without a lyrics field counts as no lyrics
            None => Err(CatalogError::NotFound),
        }
    }
}
