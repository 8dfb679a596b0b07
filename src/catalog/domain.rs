//! Internal domain models for the catalog enrichment pipeline.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

/// An artist as resolved from the metadata service.
#[derive(Debug, Clone)]
pub struct Artist {
    /// MusicBrainz artist ID (opaque to the pipeline)
    pub id: String,
    /// Display name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
    /// Disambiguation comment, useful on search result pages
    pub disambiguation: Option<String>,
}

/// A single recording (track) in an artist's catalog.
///
/// Recordings are deduplicated and ordered **by title only** - see
/// [`crate::catalog::dedup`] for the comparison policy and its accepted
/// data loss. `PartialEq` is deliberately not derived; the policy lives in
/// one place instead of leaking through structural equality.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Track title
    pub title: String,
    /// Duration in milliseconds, absent when upstream omits it
    pub duration_ms: Option<u64>,
    /// Lyrics, attached by the enrichment engine
    pub lyrics: Option<Lyrics>,
}

/// A release group (album/EP/single) in an artist's catalog.
///
/// Releases are not deduplicated; fields beyond `id` are passthrough.
#[derive(Debug, Clone)]
pub struct Release {
    /// MusicBrainz release-group ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
    /// First release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub first_release_date: Option<String>,
    /// Derived cover image reference, attached by the pipeline
    pub cover_image: String,
}

/// Lyrics for one recording, ready for rendering and aggregation.
///
/// `word_count` is the size of the token sequence, not the character count
/// of the raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct Lyrics {
    /// HTML-escaped lyrics text
    pub text: String,
    /// Ordered word tokens derived from `text`
    pub words: Vec<String>,
    /// Number of tokens in `words`
    pub word_count: usize,
}

/// Corpus-level statistics over the enriched recordings.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsStats {
    /// Recordings with a present lyrics result
    pub recordings_with_lyrics: usize,
    /// Average word count over exactly those recordings, 0.0 when none
    pub avg_words: f64,
}

/// The pipeline's sole output: one artist's enriched catalog.
///
/// A fresh snapshot per invocation; nothing is shared across requests.
#[derive(Debug, Clone)]
pub struct ArtistCatalog {
    pub artist: Artist,
    /// Unique by title, sorted ascending by title
    pub recordings: Vec<Recording>,
    pub releases: Vec<Release>,
    pub stats: LyricsStats,
}

/// Errors that can occur while talking to the upstream services.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// The requested artist id did not resolve - the pipeline's single
    /// caller-visible failure mode
    #[error("artist not found")]
    ArtistNotFound,

    #[error("no match found upstream")]
    NotFound,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("rate limited - try again later")]
    RateLimited,
}

/// Format an optional duration in milliseconds as `minutes:seconds`,
/// seconds zero-padded. Used by the rendering layer next to each recording.
pub fn format_duration(duration_ms: Option<u64>) -> Option<String> {
    duration_ms.map(|ms| {
        let total_secs = ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    })
}

/// Derive the cover image reference for a release-group id.
///
/// A pure string function; the actual image resolution behind this path is
/// deferred to request time (see [`crate::catalog::coverart`]).
pub fn cover_image_ref(release_id: &str) -> String {
    format!("/cover/{release_id}")
}
