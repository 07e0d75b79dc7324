//! Output module
//!
//! Writes collected ids and enriched video records as flat files.
//!
//! # Overview
//!
//! - [`FlatRecord`] describes one row (column names + cell values)
//! - [`RecordWriter`] writes rows as CSV or JSON Lines to any `io::Write`
//! - [`create_writer`] opens a file destination

mod record;
mod writer;

pub use record::FlatRecord;
pub use writer::{create_writer, OutputFormat, RecordWriter};
