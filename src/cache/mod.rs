//! Cache module for persisting search results to disk
//!
//! This module provides a search cache that persists API results to a single
//! JSON file in the working directory. It supports graceful degradation by
//! treating a missing or corrupt cache file as an empty cache, so cache
//! problems never prevent a search from running.

mod store;

pub use store::{CacheEntry, SearchCache};
