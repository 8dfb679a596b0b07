//! Artist search, catalog, and cover resolution commands.

use tokio::runtime::Runtime;

use crate::catalog::{ArtistCatalog, CatalogService, CoverArtClient, format_duration};
use crate::config::Config;

/// Search artists by name and list the matches
pub fn cmd_search(rt: &Runtime, config: &Config, term: &str) -> anyhow::Result<()> {
    rt.block_on(async {
        let service = CatalogService::new(config);
        let artists = service.search_artists(term).await;

        if artists.is_empty() {
            println!("No artists found for \"{term}\".");
            return;
        }

        println!("Artists matching \"{term}\":\n");
        for artist in &artists {
            match &artist.disambiguation {
                Some(note) => println!("  {}  ({})  - {}", artist.id, artist.name, note),
                None => println!("  {}  ({})", artist.id, artist.name),
            }
        }
        println!("\n{} match(es). Use `artistics artist <id>` for details.", artists.len());
    });
    Ok(())
}

/// Show an artist's enriched catalog
pub fn cmd_artist(rt: &Runtime, config: &Config, id: &str) -> anyhow::Result<()> {
    rt.block_on(async {
        let service = CatalogService::new(config);

        match service.enrich_artist(id).await {
            Ok(catalog) => print_catalog(&catalog),
            Err(e) => {
                // ArtistNotFound is the pipeline's only failure mode
                println!("✗ No artist found for id {id} ({e})");
            }
        }
    });
    Ok(())
}

/// Resolve the front cover image URL for a release group
pub fn cmd_cover(rt: &Runtime, id: &str) -> anyhow::Result<()> {
    rt.block_on(async {
        let client = CoverArtClient::new();
        // Placeholder fallback applied on any miss, like the web endpoint
        let url = client.front_cover_or_placeholder(id).await;
        println!("{url}");
    });
    Ok(())
}

fn print_catalog(catalog: &ArtistCatalog) {
    println!("{}", catalog.artist.name);
    if let Some(note) = &catalog.artist.disambiguation {
        println!("{note}");
    }

    println!("\nRecordings ({}):", catalog.recordings.len());
    for recording in &catalog.recordings {
        let duration = format_duration(recording.duration_ms).unwrap_or_else(|| "-:--".to_string());
        match &recording.lyrics {
            Some(lyrics) => {
                println!("  {:<50} {:>6}  {} words", recording.title, duration, lyrics.word_count)
            }
            None => println!("  {:<50} {:>6}  no lyrics", recording.title, duration),
        }
    }

    println!(
        "\nLyrics found for {} recording(s), {:.1} words on average",
        catalog.stats.recordings_with_lyrics, catalog.stats.avg_words
    );

    println!("\nReleases ({}):", catalog.releases.len());
    for release in &catalog.releases {
        let kind = release.primary_type.as_deref().unwrap_or("Release");
        let date = release.first_release_date.as_deref().unwrap_or("");
        println!("  {:<50} {:<8} {:<10} {}", release.title, kind, date, release.cover_image);
    }
}
