//! Aggregate statistics over enriched recordings.

use super::domain::{LyricsStats, Recording};

/// Count the recordings with lyrics and average their word counts.
///
/// The average covers exactly the recordings with a present lyrics result;
/// it is 0.0 when there are none (division is guarded). Pure.
pub fn aggregate(recordings: &[Recording]) -> LyricsStats {
    let word_counts: Vec<usize> = recordings
        .iter()
        .filter_map(|r| r.lyrics.as_ref().map(|l| l.word_count))
        .collect();

    let count = word_counts.len();
    let avg_words = if count > 0 {
        word_counts.iter().sum::<usize>() as f64 / count as f64
    } else {
        0.0
    };

    LyricsStats {
        recordings_with_lyrics: count,
        avg_words,
    }
}
