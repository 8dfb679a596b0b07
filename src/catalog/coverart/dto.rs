//! Cover Art Archive API Data Transfer Objects
//!
//! These types match EXACTLY what the Cover Art Archive returns for a
//! release-group image list.
//!
//! API: https://coverartarchive.org

use serde::{Deserialize, Serialize};

/// Image list for a release group
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverArtResponse {
    #[serde(default)]
    pub images: Vec<ImageDto>,
}

/// One archived image
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageDto {
    /// Whether the image passed community review
    #[serde(default)]
    pub approved: bool,
    /// Image types ("Front", "Back", "Booklet", ...)
    #[serde(default)]
    pub types: Vec<String>,
    /// Pre-scaled thumbnail URLs
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// Full-size image URL
    pub image: Option<String>,
}

/// Thumbnail URLs by size
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Thumbnails {
    pub small: Option<String>,
    pub large: Option<String>,
}
