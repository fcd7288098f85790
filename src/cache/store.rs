//! On-disk cache of character search results
//!
//! Provides a `SearchCache` that persists search results to a single JSON
//! file, keyed by the searched name. A missing or corrupt file degrades to
//! an empty cache rather than failing the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default cache file, relative to the working directory
const CACHE_FILE: &str = "search_cache.json";

/// A single cached search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// When the entry was created
    pub timestamp: String,
    /// Formatted text of all matching character records
    pub data: String,
    /// Formatted homeworld text, or `None` if world details were not requested
    ///
    /// Serialized as JSON `null` when absent so the file shape stays stable.
    pub homeworld: Option<String>,
}

/// In-memory cache of search results backed by a JSON file
///
/// Constructed once at startup and passed by reference into the search flow
/// and the visualizer; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct SearchCache {
    /// Path of the backing file
    path: PathBuf,
    /// Mapping from searched name to cached result
    entries: HashMap<String, CacheEntry>,
}

impl SearchCache {
    /// Loads the cache from `search_cache.json` in the working directory
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(CACHE_FILE))
    }

    /// Loads the cache from a custom file path
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_path(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self { path, entries }
    }

    /// Looks up a cached result by the searched name
    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.entries.get(name)
    }

    /// Inserts or replaces the cached result for a name
    ///
    /// Only updates the in-memory mapping; call [`save`](Self::save) to persist.
    pub fn insert(&mut self, name: String, entry: CacheEntry) {
        self.entries.insert(name, entry);
    }

    /// Writes the full mapping to the backing file as pretty JSON,
    /// replacing any prior contents
    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }

    /// Empties the in-memory mapping and overwrites the backing file with an
    /// empty JSON object
    ///
    /// The in-memory mapping is cleared even if the file write fails; the
    /// caller decides whether to surface the write error.
    pub fn clear(&mut self) -> io::Result<()> {
        self.entries.clear();
        fs::write(&self.path, "{}")
    }

    /// Iterates over all cached entries, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries.iter()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the persisted mapping, degrading to empty on a missing or
/// malformed file
fn load_entries(path: &Path) -> HashMap<String, CacheEntry> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "could not read cache file, starting empty");
            }
            return HashMap::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cache file is malformed, starting empty");
            HashMap::new()
        }
    }
}
