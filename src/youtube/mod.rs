//! YouTube Data API v3 source
//!
//! - [`Target`] parses what the user wants harvested
//! - [`YoutubeClient`] resolves channels, lists playlist items and fetches
//!   video details
//! - [`PlaylistItems`] is the [`PageSource`](crate::pagination::PageSource)
//!   the collector walks

mod client;
mod target;
mod types;

pub use client::{PlaylistItems, YoutubeClient, DEFAULT_BASE_URL};
pub use target::Target;
pub use types::{
    Channel, ChannelListResponse, PlaylistItem, PlaylistItemListResponse, Video,
    VideoListResponse, VideoSnippet, VideoStatistics, MAX_PAGE_SIZE,
};
