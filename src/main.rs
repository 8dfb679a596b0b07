//! Artistics - an artist catalog browser.
//!
//! Aggregates an artist's MusicBrainz catalog with lyrics from lyrics.ovh:
//! deduplicated recordings with per-track lyrics and word counts, releases
//! with cover references, and corpus-level lyrics statistics.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("artistics=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
