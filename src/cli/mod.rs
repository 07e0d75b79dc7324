//! CLI module
//!
//! Command-line interface for harvesting a channel or playlist.
//!
//! # Commands
//!
//! - `ids` - List every video id
//! - `videos` - Fetch metadata for every video
//! - `resolve` - Print a channel's uploads playlist id

mod commands;
mod runner;

pub use commands::{Cli, Commands, HarvestArgs};
pub use runner::Runner;
