//! Search flow: cache check, remote lookup, result assembly, write-through
//!
//! The cache-hit path never issues a remote call, even when `--world` is
//! requested and the cached entry was stored without world info. Homeworld
//! lookups are best-effort: their failures become descriptive text in the
//! result rather than errors.

use chrono::Local;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, SearchCache};
use crate::data::{LookupError, SwapiClient};

/// Timestamp format for new cache entries, local time with microseconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Result of a search, ready for display
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The name was cached; no remote call was made
    CacheHit {
        /// When the entry was cached
        timestamp: String,
        /// The stored character text
        data: String,
        /// Stored homeworld text, present only when world info was requested
        /// now and a value was stored at insertion time
        homeworld: Option<String>,
    },
    /// A remote lookup found at least one record
    Found {
        /// Concatenated character blocks, without homeworld text
        data: String,
    },
    /// The remote lookup found no records
    NotFound,
}

impl SearchOutcome {
    /// Renders the outcome as user-facing text
    pub fn render(&self) -> String {
        match self {
            SearchOutcome::CacheHit {
                timestamp,
                data,
                homeworld,
            } => {
                let mut out = format!("Cached result from {}:\n{}", timestamp, data);
                if let Some(world) = homeworld {
                    out.push_str(&format!("\n\nHomeworld\n----------------\n{}", world));
                }
                out
            }
            SearchOutcome::Found { data } => data.clone(),
            SearchOutcome::NotFound => {
                "The force is not strong within you. No results found.".to_string()
            }
        }
    }
}

/// Runs a character search against the cache first, then the API
///
/// On a miss with results, the new entry is inserted and the cache is
/// persisted before returning; a persist failure is logged but does not fail
/// the search. Character lookup errors abort the search with no cache
/// mutation.
pub async fn run_search(
    cache: &mut SearchCache,
    client: &SwapiClient,
    name: &str,
    include_world: bool,
) -> Result<SearchOutcome, LookupError> {
    if let Some(entry) = cache.get(name) {
        debug!(name, "cache hit, skipping remote lookup");
        let homeworld = if include_world {
            entry.homeworld.clone()
        } else {
            None
        };
        return Ok(SearchOutcome::CacheHit {
            timestamp: entry.timestamp.clone(),
            data: entry.data.clone(),
            homeworld,
        });
    }

    debug!(name, "cache miss, querying API");
    let characters = client.search_characters(name).await?;
    if characters.is_empty() {
        return Ok(SearchOutcome::NotFound);
    }

    let mut blocks = Vec::with_capacity(characters.len());
    // One homeworld slot per entry; with multiple records the last one wins.
    let mut homeworld = None;
    for character in &characters {
        blocks.push(character.display_block());
        if include_world {
            if let Some(url) = &character.homeworld {
                homeworld = Some(homeworld_section(client, url).await);
            }
        }
    }

    let data = blocks.join("\n");
    let entry = CacheEntry {
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        data: data.clone(),
        homeworld,
    };
    cache.insert(name.to_string(), entry);
    if let Err(e) = cache.save() {
        warn!(error = %e, "failed to persist search cache");
    }

    Ok(SearchOutcome::Found { data })
}

/// Fetches and formats homeworld details, folding every failure into a
/// descriptive message
async fn homeworld_section(client: &SwapiClient, url: &str) -> String {
    match client.fetch_homeworld(url).await {
        Ok(Some(world)) => world.display_block(),
        Ok(None) => "Homeworld information unavailable.".to_string(),
        Err(LookupError::Transport(e)) => format!("Failed to fetch homeworld data: {}", e),
        Err(e) => format!("Unexpected response format for homeworld: {}", e),
    }
}
