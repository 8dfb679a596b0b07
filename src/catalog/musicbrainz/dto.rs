//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz web service returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! We use four endpoints: artist search, artist lookup by MBID, recording
//! browse by artist, and release-group browse by artist (release groups
//! combine the CD/download/vinyl editions of an album into one entry).

use serde::{Deserialize, Serialize};

/// Artist search response (`/artist?query=...`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub artists: Vec<ArtistDto>,
}

/// Artist info, returned both by search and by direct lookup
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtistDto {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
    /// Disambiguation comment
    pub disambiguation: Option<String>,
    /// Artist type (Person, Group, etc.)
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    /// Search relevance score (search responses only)
    pub score: Option<u32>,
}

/// Recording browse response (`/recording?artist=...`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecordingBrowseResponse {
    #[serde(default)]
    pub recording_count: u64,
    #[serde(default)]
    pub recording_offset: u64,
    #[serde(default)]
    pub recordings: Vec<RecordingDto>,
}

/// A single recording within a browse response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingDto {
    /// MusicBrainz recording ID
    pub id: String,
    /// Track title
    pub title: String,
    /// Duration in milliseconds
    pub length: Option<u64>,
    /// Disambiguation comment
    pub disambiguation: Option<String>,
}

/// Release-group browse response (`/release-group?artist=...`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupBrowseResponse {
    #[serde(default)]
    pub release_group_count: u64,
    #[serde(default)]
    pub release_group_offset: u64,
    #[serde(default)]
    pub release_groups: Vec<ReleaseGroupDto>,
}

/// Release group (e.g., "Abbey Road" across all editions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupDto {
    /// MusicBrainz release group ID
    pub id: String,
    /// Title
    pub title: String,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
    /// First release date
    pub first_release_date: Option<String>,
}

/// Error response from the MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
