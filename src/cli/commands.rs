//! CLI commands and argument parsing

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Harvest video ids and metadata from a channel or playlist
#[derive(Parser, Debug)]
#[command(name = "playlist-harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, global = true, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every video id in a channel's uploads or a playlist
    Ids(HarvestArgs),

    /// Fetch title, upload date and counters for every video
    Videos(HarvestArgs),

    /// Print the uploads playlist id of a channel
    Resolve {
        /// Channel id or channel URL
        channel: String,
    },
}

/// Arguments shared by the harvesting commands
#[derive(Args, Debug, Clone)]
pub struct HarvestArgs {
    /// Channel id, playlist id, or a channel/playlist URL
    pub target: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (guessed from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Give up if the playlist still has more pages after this many
    #[arg(long)]
    pub max_pages: Option<NonZeroUsize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ids_command() {
        let cli = Cli::try_parse_from([
            "playlist-harvest",
            "ids",
            "UC_x5XG1OV2P6uZZ5FSM9Ttw",
            "-o",
            "ids.csv",
            "--max-pages",
            "5",
        ])
        .unwrap();

        let Commands::Ids(args) = cli.command else {
            panic!("Expected ids command");
        };
        assert_eq!(args.target, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(args.output, Some(PathBuf::from("ids.csv")));
        assert_eq!(args.format, None);
        assert_eq!(args.max_pages.map(NonZeroUsize::get), Some(5));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "playlist-harvest",
            "videos",
            "PLBCF2DAC6FFB574DE",
            "-f",
            "jsonl",
            "-C",
            "harvest.yaml",
            "-v",
            "--api-key",
            "k",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("harvest.yaml")));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        let Commands::Videos(args) = cli.command else {
            panic!("Expected videos command");
        };
        assert_eq!(args.format, Some(OutputFormat::Jsonl));
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let result = Cli::try_parse_from(["playlist-harvest", "ids", "x", "--max-pages", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_requires_channel() {
        assert!(Cli::try_parse_from(["playlist-harvest", "resolve"]).is_err());
    }
}
