//! Flat record shapes
//!
//! A flat record is one row: a fixed list of named columns, each rendered as
//! text for CSV. JSON Lines output goes through the record's `Serialize`
//! impl instead.

use crate::types::{ItemRecord, VideoRecord};
use chrono::SecondsFormat;
use serde::Serialize;

/// A record that can be written as a single row
pub trait FlatRecord: Serialize {
    /// Column names, in output order
    fn columns() -> &'static [&'static str];

    /// Cell values, one per column
    fn values(&self) -> Vec<String>;
}

impl FlatRecord for ItemRecord {
    fn columns() -> &'static [&'static str] {
        &["id"]
    }

    fn values(&self) -> Vec<String> {
        vec![self.id.clone()]
    }
}

fn count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl FlatRecord for VideoRecord {
    fn columns() -> &'static [&'static str] {
        &["video_id", "title", "upload_date", "views", "likes", "comments"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.video_id.clone(),
            self.title.clone(),
            self.upload_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            count(self.views),
            count(self.likes),
            count(self.comments),
        ]
    }
}
