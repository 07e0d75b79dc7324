//! Common types used throughout playlist-harvest
//!
//! This module contains the data model shared by the collector, the video
//! platform client and the output writers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Page / Item
// ============================================================================

/// One item returned by a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item identifier
    pub id: String,
}

impl ItemRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One page of a paginated listing
///
/// `next_token` is present only when more pages remain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Items on this page, in upstream order
    pub items: Vec<ItemRecord>,
    /// Continuation token for the next page
    pub next_token: Option<String>,
}

impl Page {
    /// Create a page from item ids and an optional continuation token
    pub fn new<I, S>(ids: I, next_token: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: ids.into_iter().map(ItemRecord::new).collect(),
            next_token,
        }
    }

    /// Create a final page (no continuation token)
    pub fn last<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids, None)
    }

    /// The continuation token, if it actually points at another page
    ///
    /// An empty token is treated the same as a missing one.
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if this is the final page
    pub fn is_last(&self) -> bool {
        self.continuation().is_none()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Video Record
// ============================================================================

/// Metadata for a single video, as produced by the enrichment step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub upload_date: DateTime<Utc>,
    /// Counters are `None` when the platform hides them
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy between HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(["a", "b"], Some("t1".to_string()));
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0], ItemRecord::new("a"));
        assert_eq!(page.continuation(), Some("t1"));
        assert!(!page.is_last());
    }

    #[test]
    fn test_page_last() {
        let page = Page::last(Vec::<String>::new());
        assert!(page.is_empty());
        assert!(page.is_last());
    }

    #[test]
    fn test_empty_token_is_last() {
        let page = Page::new(["a"], Some(String::new()));
        assert_eq!(page.continuation(), None);
        assert!(page.is_last());
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }
}
