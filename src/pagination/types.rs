//! Pagination types and traits
//!
//! Defines the listing capability and the collector's configuration and
//! results.

use crate::error::Result;
use crate::types::Page;
use async_trait::async_trait;

/// A listing endpoint that can be paged through with continuation tokens
///
/// The first call receives `None`. Every later call receives the token from
/// the previous page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page
    async fn list_page(&self, token: Option<&str>) -> Result<Page>;
}

/// Configuration for a collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Stop with an error once this many pages were fetched and the upstream
    /// still reports more. `None` follows the upstream until it stops.
    pub max_pages: Option<usize>,
}

impl CollectorConfig {
    /// Create a new config (unbounded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page limit
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Check whether `pages_fetched` pages already use up the limit
    pub fn limit_reached(&self, pages_fetched: usize) -> bool {
        self.max_pages.is_some_and(|max| pages_fetched >= max)
    }
}

/// Counters for a collection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    /// Pages fetched from the upstream
    pub pages_fetched: usize,
    /// Item ids accumulated
    pub items_collected: usize,
}

impl CollectionStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fetched page
    pub fn add_page(&mut self, items: usize) {
        self.pages_fetched += 1;
        self.items_collected += items;
    }
}

/// Completed collection: every id in arrival order, plus counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Item ids, duplicates included
    pub ids: Vec<String>,
    /// Counters for the run that produced `ids`
    pub stats: CollectionStats,
}

impl Collection {
    /// Consume the collection, keeping only the ids
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}
