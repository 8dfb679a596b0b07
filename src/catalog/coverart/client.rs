//! Cover Art Archive HTTP client
//!
//! Fetches release-group artwork references from the Cover Art Archive.
//! No API key required, but please respect their rate limits.
//!
//! API: https://coverartarchive.org

use super::dto;
use crate::catalog::domain::CatalogError;

/// Reference to the bundled placeholder image, served when no usable front
/// cover exists. The archive is slow and patchy; pages load covers lazily
/// through this fallback rather than blocking on it.
pub const PLACEHOLDER_IMAGE: &str = "/images/question.png";

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    /// Create a new client
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: "https://coverartarchive.org".to_string(),
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

    /// Resolve the front cover URL for a MusicBrainz release group.
    ///
    /// There can be several archived images; the one we want is the
    /// approved front cover. Returns its large thumbnail URL.
    pub async fn front_cover_url(&self, release_group_id: &str) -> Result<String, CatalogError> {
        let url = format!("{}/release-group/{}", self.base_url, release_group_id);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
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
            .json::<dto::CoverArtResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        select_front_cover(&body.images).ok_or(CatalogError::NotFound)
    }

    /// Resolve the front cover with the placeholder fallback applied: any
    /// error (404, back-cover-only lists, transport failure) degrades to
    /// the placeholder reference instead of propagating.
    pub async fn front_cover_or_placeholder(&self, release_group_id: &str) -> String {
        match self.front_cover_url(release_group_id).await {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("no front cover for {}: {}", release_group_id, e);
                PLACEHOLDER_IMAGE.to_string()
            }
        }
    }
}

/// Pick the approved front cover from an image list, preferring the large
/// thumbnail and falling back to the full-size image.
fn select_front_cover(images: &[dto::ImageDto]) -> Option<String> {
    images
        .iter()
        .find(|img| img.approved && img.types.iter().any(|t| t == "Front"))
        .and_then(|img| img.thumbnails.large.clone().or_else(|| img.image.clone()))
}

impl Default for CoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(approved: bool, types: &[&str], large: Option<&str>) -> dto::ImageDto {
        dto::ImageDto {
            approved,
            types: types.iter().map(|t| t.to_string()).collect(),
            thumbnails: dto::Thumbnails {
                small: None,
                large: large.map(String::from),
            },
            image: Some("http://example.com/full.jpg".to_string()),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = CoverArtClient::new();
        assert_eq!(client.base_url, "https://coverartarchive.org");
    }

    #[test]
    fn test_selects_approved_front() {
        let images = vec![
            image(true, &["Back"], Some("http://example.com/back.jpg")),
            image(true, &["Front"], Some("http://example.com/front.jpg")),
        ];
        assert_eq!(
            select_front_cover(&images).as_deref(),
            Some("http://example.com/front.jpg")
        );
    }

    #[test]
    fn test_skips_unapproved_front() {
        let images = vec![image(false, &["Front"], Some("http://example.com/front.jpg"))];
        assert!(select_front_cover(&images).is_none());
    }

    #[test]
    fn test_back_only_list_yields_none() {
        let images = vec![image(true, &["Back"], Some("http://example.com/back.jpg"))];
        assert!(select_front_cover(&images).is_none());
    }

    #[test]
    fn test_falls_back_to_full_size_image() {
        let images = vec![image(true, &["Front"], None)];
        assert_eq!(
            select_front_cover(&images).as_deref(),
            Some("http://example.com/full.jpg")
        );
    }
}
