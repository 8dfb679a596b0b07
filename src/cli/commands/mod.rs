//! CLI command definitions and dispatch.
//!
//! Each subcommand mirrors one page of the web application this pipeline
//! feeds: `search` is the search-results page, `artist` the artist-detail
//! page, and `cover` the deferred cover-image resolution.

mod browse;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;

pub use browse::{cmd_artist, cmd_cover, cmd_search};

/// Artistics CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search MusicBrainz artists by name
    Search {
        /// Search term (artist name)
        term: String,
    },
    /// Show an artist's enriched catalog: recordings with lyrics
    /// statistics, plus releases
    Artist {
        /// MusicBrainz artist ID
        id: String,
    },
    /// Resolve the front cover image URL for a release group
    Cover {
        /// MusicBrainz release-group ID
        id: String,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = config::load();

    match &cli.command {
        Commands::Search { term } => cmd_search(&rt, &config, term),
        Commands::Artist { id } => cmd_artist(&rt, &config, id),
        Commands::Cover { id } => cmd_cover(&rt, id),
    }
}
