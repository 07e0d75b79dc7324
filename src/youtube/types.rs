//! Response bodies of the YouTube Data API v3
//!
//! Only the fields the harvester reads are modelled; everything else in the
//! response is ignored by serde.

use crate::types::{Page, VideoRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Largest `maxResults` / id batch the API accepts
pub const MAX_PAGE_SIZE: u32 = 50;

// ============================================================================
// channels.list
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<Channel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub content_details: ChannelContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: String,
}

// ============================================================================
// playlistItems.list
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

impl From<PlaylistItemListResponse> for Page {
    fn from(response: PlaylistItemListResponse) -> Self {
        Page::new(
            response
                .items
                .into_iter()
                .map(|item| item.content_details.video_id),
            response.next_page_token,
        )
    }
}

// ============================================================================
// videos.list
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// Counters arrive as decimal strings and are omitted when hidden
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

fn parse_count(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.parse().ok())
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        let stats = &video.statistics;
        Self {
            views: parse_count(stats.view_count.as_deref()),
            likes: parse_count(stats.like_count.as_deref()),
            comments: parse_count(stats.comment_count.as_deref()),
            video_id: video.id,
            title: video.snippet.title,
            upload_date: video.snippet.published_at,
        }
    }
}
