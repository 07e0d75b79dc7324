//! What to harvest: a channel's uploads or a single playlist
//!
//! Accepts raw ids as well as the URLs people copy out of a browser.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static CHANNEL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC[0-9A-Za-z_-]{22}$").unwrap());

static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(PL|UU|LL|FL|OL|RD)[0-9A-Za-z_-]{10,}$").unwrap());

/// A harvest target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every upload of a channel
    Channel(String),
    /// A single playlist
    Playlist(String),
}

impl Target {
    /// Parse a channel id, playlist id, channel URL or playlist URL
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if CHANNEL_ID.is_match(input) {
            return Ok(Self::Channel(input.to_string()));
        }
        if PLAYLIST_ID.is_match(input) {
            return Ok(Self::Playlist(input.to_string()));
        }

        let url = Url::parse(input).map_err(|_| Error::invalid_target(input))?;
        let on_youtube = url
            .host_str()
            .is_some_and(|host| host == "youtube.com" || host.ends_with(".youtube.com"));
        if !on_youtube {
            return Err(Error::invalid_target(input));
        }

        if let Some((_, list)) = url.query_pairs().find(|(key, _)| key == "list") {
            if PLAYLIST_ID.is_match(&list) {
                return Ok(Self::Playlist(list.into_owned()));
            }
        }

        let mut segments = url.path_segments().into_iter().flatten();
        if let (Some("channel"), Some(id)) = (segments.next(), segments.next()) {
            if CHANNEL_ID.is_match(id) {
                return Ok(Self::Channel(id.to_string()));
            }
        }

        Err(Error::invalid_target(input))
    }

    /// The raw id, without saying which kind it is
    pub fn id(&self) -> &str {
        match self {
            Self::Channel(id) | Self::Playlist(id) => id,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(id) => write!(f, "channel {id}"),
            Self::Playlist(id) => write!(f, "playlist {id}"),
        }
    }
}

impl std::str::FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
