//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if MusicBrainz changes their response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::catalog::domain::{Artist, Recording, Release};

/// Convert an artist DTO (search hit or direct lookup) to a domain artist.
///
/// Empty-string disambiguations are normalized to `None` so callers never
/// have to distinguish "absent" from "blank".
pub fn to_artist(dto: dto::ArtistDto) -> Artist {
    Artist {
        id: dto.id,
        name: dto.name,
        sort_name: dto.sort_name.filter(|s| !s.is_empty()),
        disambiguation: dto.disambiguation.filter(|s| !s.is_empty()),
    }
}

/// Convert a browsed recording to a domain recording.
///
/// The recording id is dropped: recordings are deduplicated by title
/// downstream, so a surviving id would be misleading. Lyrics start absent
/// and are attached by the enrichment engine.
pub fn to_recording(dto: dto::RecordingDto) -> Recording {
    Recording {
        title: dto.title,
        duration_ms: dto.length,
        lyrics: None,
    }
}

/// Convert a browsed release group to a domain release.
///
/// The cover image reference is attached later by the pipeline, not here.
pub fn to_release(dto: dto::ReleaseGroupDto) -> Release {
    Release {
        id: dto.id,
        title: dto.title,
        primary_type: dto.primary_type,
        first_release_date: dto.first_release_date,
        cover_image: String::new(),
    }
}
