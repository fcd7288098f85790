//! Command-line interface parsing for the Holocron CLI
//!
//! This module defines the `search` and `cache` subcommands using clap,
//! mirroring the tool's two modes: looking up characters and managing the
//! local result cache.

use clap::{Parser, Subcommand};

/// Holocron - Star Wars character search with a local result cache
#[derive(Parser, Debug)]
#[command(name = "holocron")]
#[command(about = "Star Wars API character search tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for a Star Wars character
    Search {
        /// Full or partial name of the character to search
        character_name: String,

        /// Include details about the character's homeworld
        #[arg(long)]
        world: bool,
    },
    /// Manage the cache
    ///
    /// With both flags given, --clean takes precedence; with neither,
    /// the command does nothing.
    Cache {
        /// Clear the cache
        #[arg(long)]
        clean: bool,

        /// Render a chart of cached searches
        #[arg(long)]
        visualize: bool,
    },
}
