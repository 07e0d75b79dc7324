//! Pagination module
//!
//! Cursor-based paginated collection.
//!
//! # Overview
//!
//! A [`PageSource`] returns one page of items plus an optional continuation
//! token. The [`Collector`] calls it in strict sequence, feeding each token
//! back in, and accumulates every item id until a page arrives without a
//! token. Ids are kept in arrival order and never deduplicated.
//!
//! ```text
//! {FETCHING} --token present--> {FETCHING} --token absent--> {DONE}
//! ```

mod collector;
mod types;

pub use collector::{collect, collect_fn, Collector};
pub use types::{Collection, CollectionStats, CollectorConfig, PageSource};
