//! lyrics.ovh API Data Transfer Objects
//!
//! These types match EXACTLY what the lyrics.ovh API returns.
//! DO NOT use these types outside the lyrics module - convert to domain types.
//!
//! The v1 endpoint returns `{"lyrics": "..."}` on success and
//! `{"error": "No lyrics found"}` with a 404 status otherwise.

use serde::{Deserialize, Serialize};

/// Successful lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsResponse {
    /// Raw lyrics text; the field is absent on some malformed responses
    pub lyrics: Option<String>,
}

/// Error response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
}
