// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # playlist-harvest
//!
//! Cursor-based paginated collection, and a small harvester built on it that
//! lists every video of a channel or playlist and exports their metadata.
//!
//! ## Features
//!
//! - **Paginated collection**: follow continuation tokens until the upstream
//!   runs out of pages, keeping every id in arrival order
//! - **YouTube Data API v3**: channel to uploads playlist resolution,
//!   playlist items, batched video details
//! - **HTTP retries**: bounded retries with backoff on 429 and 5xx
//! - **Flat output**: CSV or JSON Lines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use playlist_harvest::{collect_fn, Page, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ids = collect_fn(|token| async move {
//!         Ok(match token.as_deref() {
//!             None => Page::new(["a", "b"], Some("t1".to_string())),
//!             _ => Page::last(["c"]),
//!         })
//!     })
//!     .await?;
//!
//!     assert_eq!(ids, ["a", "b", "c"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                          CLI                              │
//! │        ids <target>   videos <target>   resolve <channel> │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┴──────┬────────────┬──────────┐
//! │  Config    │      YouTube         │ Pagination │  Output  │
//! ├────────────┼──────────────────────┼────────────┼──────────┤
//! │ YAML       │ Target parsing       │ PageSource │ CSV      │
//! │ env refs   │ Uploads playlist     │ Collector  │ JSONL    │
//! │            │ Playlist items       │ Page stream│          │
//! │            │ Video details        │            │          │
//! └────────────┴──────────────────────┴────────────┴──────────┘
//!                              │
//!                     HTTP (retry, backoff)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// HTTP client with retry
pub mod http;

/// Cursor-based paginated collection
pub mod pagination;

/// YouTube Data API v3 source
pub mod youtube;

/// CSV and JSON Lines output
pub mod output;

/// Configuration file
pub mod config;

/// Template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use pagination::{collect, collect_fn, Collector, CollectorConfig, PageSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
