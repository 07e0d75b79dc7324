//! YouTube Data API client
//!
//! Wraps the three endpoints the harvester needs: channel lookup, playlist
//! item listing (as a [`PageSource`]) and video details.

use super::target::Target;
use super::types::{
    ChannelListResponse, PlaylistItemListResponse, VideoListResponse, MAX_PAGE_SIZE,
};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Collector, PageSource};
use crate::types::{Page, VideoRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the YouTube Data API v3
///
/// Relative paths go through the HTTP client's base URL, so the client
/// should be built with [`DEFAULT_BASE_URL`] (or a stand-in for tests).
pub struct YoutubeClient {
    http: HttpClient,
    api_key: String,
    page_size: u32,
}

impl YoutubeClient {
    /// Create a client using `api_key` for every request
    pub fn new(http: HttpClient, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Set how many playlist items to request per page (clamped to 1..=50)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn request(&self, part: &str) -> RequestConfig {
        RequestConfig::new()
            .query("part", part)
            .query("key", &self.api_key)
    }

    /// Look up the playlist holding every upload of a channel
    pub async fn uploads_playlist_id(&self, channel_id: &str) -> Result<String> {
        let response: ChannelListResponse = self
            .http
            .get_json_with_config(
                "channels",
                self.request("contentDetails").query("id", channel_id),
            )
            .await?;

        let channel = response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::ChannelNotFound {
                channel_id: channel_id.to_string(),
            })?;

        let uploads = channel.content_details.related_playlists.uploads;
        debug!(channel = %channel.id, playlist = %uploads, "Resolved uploads playlist");
        Ok(uploads)
    }

    /// Resolve a target to the playlist that lists its videos
    pub async fn resolve(&self, target: &Target) -> Result<String> {
        match target {
            Target::Channel(id) => self.uploads_playlist_id(id).await,
            Target::Playlist(id) => Ok(id.clone()),
        }
    }

    /// A page source over the items of one playlist
    pub fn playlist_items(&self, playlist_id: impl Into<String>) -> PlaylistItems<'_> {
        PlaylistItems {
            client: self,
            playlist_id: playlist_id.into(),
        }
    }

    /// Collect every video id in the target, in playlist order
    pub async fn video_ids(&self, target: &Target, collector: &Collector) -> Result<Vec<String>> {
        let playlist_id = self.resolve(target).await?;
        info!(%target, playlist = %playlist_id, "Collecting video ids");
        collector.collect(&self.playlist_items(playlist_id)).await
    }

    /// Fetch metadata for each id
    ///
    /// Returns one record per input id, in input order; repeated ids give
    /// repeated records. Ids the API does not return (private or deleted
    /// videos) are skipped.
    pub async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoRecord>> {
        let mut found: HashMap<String, VideoRecord> = HashMap::with_capacity(ids.len());

        for batch in ids.chunks(MAX_PAGE_SIZE as usize) {
            let response: VideoListResponse = self
                .http
                .get_json_with_config(
                    "videos",
                    self.request("snippet,statistics")
                        .query("id", batch.join(",")),
                )
                .await?;

            debug!(
                requested = batch.len(),
                returned = response.items.len(),
                "Fetched video details"
            );

            for video in response.items {
                found.insert(video.id.clone(), video.into());
            }
        }

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match found.get(id) {
                Some(record) => records.push(record.clone()),
                None => warn!(video_id = %id, "No details returned, skipping"),
            }
        }
        Ok(records)
    }
}

impl std::fmt::Debug for YoutubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeClient")
            .field("http", &self.http)
            .field("api_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Pages through `playlistItems.list` for one playlist
#[derive(Debug)]
pub struct PlaylistItems<'a> {
    client: &'a YoutubeClient,
    playlist_id: String,
}

impl PlaylistItems<'_> {
    /// Playlist being paged
    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }
}

#[async_trait]
impl PageSource for PlaylistItems<'_> {
    async fn list_page(&self, token: Option<&str>) -> Result<Page> {
        let config = self
            .client
            .request("contentDetails")
            .query("playlistId", &self.playlist_id)
            .query("maxResults", self.client.page_size.to_string())
            .query_opt("pageToken", token);

        let response: PlaylistItemListResponse = self
            .client
            .http
            .get_json_with_config("playlistItems", config)
            .await?;

        Ok(response.into())
    }
}
