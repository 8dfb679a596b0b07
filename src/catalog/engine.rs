//! Lyrics enrichment engine: bounded concurrent fan-out.
//!
//! For N recordings, runs N independent lyrics lookups with at most
//! `max_concurrent` in flight, and merges results back by index. The cap
//! protects the lyrics upstream when an artist has hundreds of recordings.
//!
//! Completion order is not observable in the result: each lookup carries
//! its input index and writes into its own pre-sized slot, so result *i*
//! always belongs to title *i* no matter which lookups finish first.

use futures::{StreamExt, stream};

use super::domain::Lyrics;
use super::traits::LyricsApi;

/// Fetch lyrics for every title, returning one `Option<Lyrics>` per title
/// in input order. Any failed lookup yields `None` for its slot without
/// affecting the rest of the batch; there are no retries.
pub async fn fetch_lyrics<L>(
    client: &L,
    artist_name: &str,
    titles: &[String],
    max_concurrent: usize,
) -> Vec<Option<Lyrics>>
where
    L: LyricsApi + ?Sized,
{
    let mut slots: Vec<Option<Lyrics>> = vec![None; titles.len()];

    let mut lookups = stream::iter(titles.iter().enumerate())
        .map(|(index, title)| async move { (index, client.lookup(artist_name, title).await) })
        .buffer_unordered(max_concurrent.max(1));

    while let Some((index, result)) = lookups.next().await {
        match result {
            Ok(lyrics) => slots[index] = Some(lyrics),
            Err(e) => {
                tracing::debug!("no lyrics for {:?}: {}", titles[index], e);
            }
        }
    }

    slots
}
