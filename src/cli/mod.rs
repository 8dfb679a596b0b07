//! Command-line interface for artistics.
//!
//! This module provides CLI commands for searching artists and rendering
//! their enriched catalogs without a web front end.

mod commands;

pub use commands::{Cli, Commands, run_command};
