//! Terminal bar chart of cached searches
//!
//! Renders one row per cached entry, most recent first. Bar length encodes
//! recency rank: the newest entry gets the full bar, older entries get
//! proportionally shorter bars, floored at one block so every entry stays
//! visible.

use crate::cache::SearchCache;

/// Width of the longest bar in characters
const MAX_BAR_WIDTH: usize = 30;

/// Block character used for bars
const BAR_BLOCK: char = '█';

/// A renderable chart of cache contents
#[derive(Debug)]
pub struct CacheChart {
    rows: Vec<ChartRow>,
}

/// One chart row, derived from a cache entry
#[derive(Debug)]
struct ChartRow {
    /// First line of the entry's stored data
    label: String,
    /// When the entry was cached
    timestamp: String,
    /// Bar length in blocks
    bar_width: usize,
}

impl CacheChart {
    /// Builds a chart from the cache, or `None` when the cache is empty
    ///
    /// Entries are ordered newest first. Timestamps are creation times, so
    /// sorting them descending reproduces most-recently-added-first; equal
    /// timestamps fall back to name order.
    pub fn from_cache(cache: &SearchCache) -> Option<Self> {
        if cache.is_empty() {
            return None;
        }

        let mut entries: Vec<_> = cache.entries().collect();
        entries.sort_by(|a, b| {
            b.1.timestamp
                .cmp(&a.1.timestamp)
                .then_with(|| a.0.cmp(b.0))
        });

        let total = entries.len();
        let rows = entries
            .into_iter()
            .enumerate()
            .map(|(rank, (name, entry))| {
                let label = entry
                    .data
                    .lines()
                    .next()
                    .unwrap_or(name.as_str())
                    .to_string();
                let bar_width = (MAX_BAR_WIDTH * (total - rank) / total).max(1);
                ChartRow {
                    label,
                    timestamp: entry.timestamp.clone(),
                    bar_width,
                }
            })
            .collect();

        Some(Self { rows })
    }

    /// Renders the chart as display text, one bar per row
    pub fn render(&self) -> String {
        let mut out = String::from("Cached Searches\n");
        for row in &self.rows {
            let bar: String = std::iter::repeat(BAR_BLOCK).take(row.bar_width).collect();
            out.push_str(&format!(
                "{:<width$} {} ({})\n",
                bar,
                row.label,
                row.timestamp,
                width = MAX_BAR_WIDTH
            ));
        }
        out
    }
}
