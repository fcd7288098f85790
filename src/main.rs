//! Holocron CLI - Search Star Wars characters with a local result cache
//!
//! A command-line tool that looks up characters on swapi.tech, caches
//! results to a JSON file in the working directory, and can render a bar
//! chart of cached searches.

mod cache;
mod chart;
mod cli;
mod data;
mod search;

use clap::Parser;
use tracing::warn;

use cache::SearchCache;
use chart::CacheChart;
use cli::{Cli, Command};
use data::{LookupError, SwapiClient};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr via tracing; user output stays on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cache = SearchCache::new();

    match cli.command {
        Command::Search {
            character_name,
            world,
        } => {
            let client = SwapiClient::new();
            match search::run_search(&mut cache, &client, &character_name, world).await {
                Ok(outcome) => println!("{}", outcome.render()),
                Err(LookupError::Transport(e)) => println!("Failed to connect to the API: {}", e),
                Err(e) => println!("Unexpected response format: {}", e),
            }
        }
        Command::Cache { clean, visualize } => {
            if clean {
                // Success is reported even when the write fails; the failure
                // stays observable through the log
                if let Err(e) = cache.clear() {
                    warn!(error = %e, "failed to overwrite cache file during clear");
                }
                println!("Cache cleared successfully.");
            } else if visualize {
                match CacheChart::from_cache(&cache) {
                    Some(chart) => print!("{}", chart.render()),
                    None => println!("No cached searches to visualize."),
                }
            }
        }
    }
}
